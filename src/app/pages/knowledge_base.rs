use dioxus::prelude::*;

use crate::app::components::EmptyState;
use crate::domain::knowledge;

#[component]
pub fn KnowledgeBase() -> Element {
    let mut search_query = use_signal(String::new);

    let query = search_query.read().clone();
    let hits = knowledge::search(knowledge::all_articles(), &query);
    let groups = knowledge::group_by_category(&hits);

    rsx! {
        div { class: "c-page c-kb",
            header { class: "c-page__header",
                h1 { class: "c-page__title", "🗄️ Knowledge Base" }
                p { class: "c-page__description", "Reference index for systems and protocols" }
            }

            div { class: "c-kb__search",
                input {
                    r#type: "text",
                    class: "c-kb__search-input",
                    placeholder: "🔍 Search articles...",
                    value: "{search_query}",
                    oninput: move |evt| search_query.set(evt.value()),
                }
            }

            if groups.is_empty() {
                EmptyState {
                    icon: "🗄️",
                    title: "No articles found",
                    description: format!("Nothing matches \"{query}\"."),
                }
            } else {
                for (category, articles) in groups {
                    div { class: "c-kb__group", key: "{category}",
                        div { class: "c-kb__group-header", "{category}" }
                        for article in articles {
                            div { class: "c-kb__article", key: "{article.id}",
                                div { class: "c-kb__article-title", "{article.title}" }
                                p { class: "c-kb__article-summary", "{article.summary}" }
                                div { class: "c-kb__article-tags",
                                    for tag in article.tags.iter() {
                                        span { class: "c-kb__tag", "{tag}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
