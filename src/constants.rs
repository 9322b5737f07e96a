/// The only table the application stores orders in.
pub const REPAIRS_TABLE: &str = "repairs";

/// Separator used when serializing the selected brands into `laptop_brands`.
pub const BRAND_SEPARATOR: &str = ", ";

pub const DEFAULT_BRANDS: &[&str] = &["HP", "Dell", "Lenovo", "Asus", "Acer", "Apple"];

pub mod fields {

    pub const ID: &str = "id";

    pub const USERNAME: &str = "username";

    pub const LAPTOP_BRANDS: &str = "laptop_brands";

    pub const SUBMIT_DATE: &str = "submit_date";

    pub const REPAIR_ID: &str = "repair_id";

    pub const BRAND: &str = "brand";

    pub const USER_ID: &str = "user_id";
}

pub mod routes {

    pub const ORDER_FORM: &str = "/orderform";

    pub const VIEW_ORDERS: &str = "/view_orders";

    pub const NORMALIZE: &str = "/normalize";
}
