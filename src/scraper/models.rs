use serde::Deserialize;

// products.json page
//  └── products[]
//       ├── id
//       ├── title
//       ├── handle
//       ├── body_html
//       ├── options[]
//       │    └── name
//       └── variants[]
//            ├── title
//            ├── price
//            └── compare_at_price

#[derive(Debug, Deserialize)]
pub struct ProductsPage {
    #[serde(default)]
    pub products: Vec<ShopProduct>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShopProduct {
    pub id: i64,
    pub title: String,
    pub handle: String,
    #[serde(rename = "body_html")]
    pub body_html: Option<String>,

    #[serde(default)]
    pub options: Vec<ShopOption>,
    #[serde(default)]
    pub variants: Vec<ShopVariant>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShopOption {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShopVariant {
    pub title: String,
    pub price: String,
    #[serde(rename = "compare_at_price")]
    pub compare_at_price: Option<String>,
}
