//! Decor AI Common Library
//!
//! サーバとWeb(WASM)で共有される型とユーティリティ

pub mod types;
pub mod error;
pub mod parser;
pub mod prompts;

pub use types::{ShoppingListItem, Source, WebSource};
pub use error::{Error, Result};
pub use parser::{extract_json, parse_product_links, shopping_list_lines};
pub use prompts::{
    build_decorate_prompt, build_product_links_prompt, build_shopping_list_prompt, DECOR_THEMES,
};
