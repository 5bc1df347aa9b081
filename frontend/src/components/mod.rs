// Reusable components live here.

pub mod article_card;
pub mod article_detail;
pub mod article_list;
pub mod create_article_form;
pub mod error_banner;
pub mod header;
pub mod icons;
pub mod loading_spinner;
pub mod skeleton;
pub mod theme_toggle;
