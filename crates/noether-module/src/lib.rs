#![deny(missing_docs)]
#![doc = "Noetherian rings with registered ideals, finitely presented modules and cyclic quotients."]

mod elimination;
mod module;
mod quotient;
mod ring;

pub use module::Module;
pub use quotient::QuotientModule;
pub use ring::{LabelledIdeal, NoetherianRing};
