//! dimensa-core: Units-of-measure algebra
//!
//! This crate provides a validated unit catalog and the algebra over it:
//! conversion, simplification with derived-dimension search, automatic
//! prefix selection and arithmetic on quantities. It is generic over the
//! value representation (`f64`, `Decimal`, `glam` vectors, [`Uncertain`]).
//!
//! # Example
//!
//! ```
//! use dimensa_core::{Engine, Quantity};
//!
//! let engine = Engine::standard().unwrap();
//!
//! // Conversion
//! let q = engine.quantity(5.0, "minute").unwrap();
//! let s = q.convert_to_unit(&engine, "second").unwrap();
//! assert!((s.value() - 300.0).abs() < 1e-9);
//!
//! // Simplification finds derived dimensions
//! let m = engine.dimension("meter", 1).unwrap();
//! let per_s = engine.dimension("second", -1).unwrap();
//! let speed = Quantity::new(3.0, vec![m, per_s]).simplify(&engine).unwrap();
//! assert_eq!(speed.display(&engine).to_string(), "3 m/s");
//! ```

pub mod algebra;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod number;
pub mod quantity;
pub mod settings;

pub use algebra::Dimension;
pub use catalog::{Catalog, CatalogBuilder, DefinitionId, PrefixId, SystemId, UnitId, UnitKind};
pub use engine::Engine;
pub use error::{ConversionError, Error, Result};
pub use number::{Numeric, Uncertain};
pub use quantity::{Quantity, QuantityDisplay};
pub use settings::Settings;
