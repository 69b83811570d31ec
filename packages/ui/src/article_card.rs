use dioxus::prelude::*;
use gazeta_api::dates::format_long_date;
use gazeta_api::types::Article;

use crate::media::image_src;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardLayout {
    #[default]
    Regular,
    /// Lead story: wide image, large headline.
    Featured,
    /// Sidebar entry: square image, short date.
    Compact,
}

impl CardLayout {
    fn class(self) -> &'static str {
        match self {
            CardLayout::Regular => "article_card",
            CardLayout::Featured => "article_card featured",
            CardLayout::Compact => "article_card compact",
        }
    }
}

pub fn article_href(slug: &str) -> String {
    format!("/article/{}", urlencoding::encode(slug))
}

#[component]
pub fn ArticleCard(article: Article, #[props(default)] layout: CardLayout) -> Element {
    let lang = crate::use_current_lang();
    let title = article.title(lang).to_string();
    let category = article.category_name(lang).to_uppercase();
    let src = image_src(article.thumbnail.as_deref());
    let date = format_long_date(&article.created_at, lang);
    let href = article_href(&article.slug);

    rsx! {
        a { class: layout.class(), href: "{href}",
            div { class: "article_thumb",
                img { src: "{src}", alt: "{title}" }
            }
            div { class: "article_meta",
                if !category.is_empty() {
                    p { class: "article_category", "{category}" }
                }
                if layout == CardLayout::Featured {
                    h1 { class: "article_title", "{title}" }
                } else {
                    h2 { class: "article_title", "{title}" }
                }
                p { class: "hint", "{date}" }
            }
        }
    }
}
