mod product;

pub use product::{InvalidProduct, ProductData, ProductRecord};
