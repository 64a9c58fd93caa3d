#![doc = r#"
gamethumbs — prepares the fixed set of game icons as uniform PNG thumbnails.

Two independent procedures walk an ordered entry list once:

- **crop**: read a local image, drop any alpha channel, centered-crop it to the target
  aspect ratio and resize it to the exact target size with a Lanczos3 filter.
- **download**: GET an image over HTTP and stretch it to the exact target size.

Every entry is isolated: a missing source, a bad download or a corrupt file is logged and
recorded in the returned `BatchReport`, and the run moves on to the next entry.

Quick start: crop the built-in entries
--------------------------------------
```rust,no_run
use gamethumbs::{Manifest, PrepParams, TargetSize, process_local_entries};

fn main() -> gamethumbs::Result<()> {
    let params = PrepParams {
        target: TargetSize::new(300, 200)?,
        ..PrepParams::default()
    };
    let report = process_local_entries(&Manifest::builtin().local, &params)?;
    println!("processed={} skipped={} errors={}", report.processed, report.skipped, report.errors);
    Ok(())
}
```

Pure transforms
---------------
The crop arithmetic and the byte-to-byte transforms do no I/O:

```rust
use gamethumbs::{TargetSize, centered_crop_rect};

let rect = centered_crop_rect(1000, 200, TargetSize::new(300, 200).unwrap());
assert_eq!((rect.left, rect.width, rect.height), (350, 300, 200));
```

Downloading with a custom byte source
-------------------------------------
`process_remote_entries` takes any `Fetcher`. With the default `remote` feature,
`HttpFetcher` performs blocking GET requests via reqwest.

```rust,no_run
# #[cfg(feature = "remote")]
# fn main() -> gamethumbs::Result<()> {
use gamethumbs::{HttpFetcher, Manifest, PrepParams, process_remote_entries};

let fetcher = HttpFetcher::new()?;
process_remote_entries(&fetcher, &Manifest::builtin().remote, &PrepParams::default())?;
# Ok(())
# }
# #[cfg(not(feature = "remote"))]
# fn main() {}
```

Feature flags
-------------
- `remote` (default): the reqwest-backed `HttpFetcher`.
- `full`: everything.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::manifest::{LocalEntry, Manifest, RemoteEntry};
pub use crate::core::params::PrepParams;
pub use crate::core::processing::crop::{CropRect, centered_crop_rect};
pub use crate::core::processing::pipeline::{
    crop_and_resize, crop_and_resize_bytes, stretch_resize, stretch_resize_bytes,
};
pub use error::{Error, Result};
pub use types::{ItemOutcome, Procedure, ResampleFilter, TargetSize};

pub use io::fetch::{FetchResponse, Fetcher};
#[cfg(feature = "remote")]
pub use io::fetch::HttpFetcher;
pub use io::writers::report::write_report;

pub use api::{
    BatchReport, ItemReport, download_remote_image, ensure_images_dir, prepare_local_image,
    process_local_entries, process_local_entry, process_remote_entries, process_remote_entry,
};
