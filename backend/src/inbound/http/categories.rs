//! Static language category listing.

use actix_web::{get, web};

use crate::domain::{LANGUAGE_CATEGORIES, LanguageCategory};
use crate::inbound::http::schemas::LanguageCategorySchema;

/// List the fixed language categories.
#[utoipa::path(
    get,
    path = "/language_categories",
    responses((status = 200, description = "Language categories", body = [LanguageCategorySchema])),
    tags = ["catalogue"],
    operation_id = "languageCategories",
    security([])
)]
#[get("/language_categories")]
pub async fn language_categories() -> web::Json<&'static [LanguageCategory]> {
    web::Json(&LANGUAGE_CATEGORIES)
}
