//! # pixtone-ops
//!
//! In-place adjustments for RGBA8 images.
//!
//! Every filter takes a [`RgbaBufferMut`](pixtone_core::RgbaBufferMut) and
//! rewrites it in place. Filters never fail: parameters outside their
//! nominal range are clamped or degrade to defined output.
//!
//! # Modules
//!
//! - [`point`] - Brightness and contrast
//! - [`hsv_adjust`] - Saturation, hue, HSL saturation, lightness
//! - [`curves`] - 256-entry curve remapping
//! - [`filter`] - Box blur and 3x3 sharpen
//! - [`op`] - Named filter selection and raw-buffer entry points
//! - [`adjustments`] - Serializable adjustment stack
//!
//! # Example
//!
//! ```rust
//! use pixtone_core::RgbaImage;
//! use pixtone_ops::{Adjustments, Filter};
//!
//! let mut img = RgbaImage::filled(8, 8, [120, 80, 40, 255]);
//!
//! // One filter
//! Filter::Contrast(25.0).apply(&mut img.view_mut());
//!
//! // A whole editor state
//! let adj = Adjustments {
//!     saturation: -100.0,
//!     blur: 2.0,
//!     ..Default::default()
//! };
//! adj.apply(&mut img.view_mut());
//!
//! let [r, g, b, a] = img.pixel(4, 4);
//! assert!(r == g && g == b);
//! assert_eq!(a, 255);
//! ```
//!
//! ## Raw buffers
//!
//! ```rust
//! use pixtone_ops::process;
//!
//! let mut rgba = vec![200u8; 4 * 4 * 4];
//! process("hue", &mut rgba, 4, 4, 90.0)?;
//! # Ok::<(), pixtone_ops::OpsError>(())
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` (default) - Process pixels and rows with `rayon`. Output is
//!   identical with the feature on or off.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod adjustments;
pub mod curves;
pub mod filter;
pub mod hsv_adjust;
pub mod op;
pub mod point;

pub use adjustments::Adjustments;
pub use error::{OpsError, OpsResult};
pub use op::{Filter, FilterKind, process, process_curves};
