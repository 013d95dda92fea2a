// Engine-side form models. The plain data types (Product, CurrencyInput)
// live in the `shared` crate.
pub mod price_field;
pub mod product_form;
