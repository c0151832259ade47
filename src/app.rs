//! Demo Host App
//!
//! Owns the item collection and applies the requests coming out of several
//! differently configured `TodoList` instances.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use leptos::prelude::*;

use todolist_ui::{
    Layout, ModalEditor, Priority, SharedEditor, SortField, SortOrder, Theme, TodoItem, TodoList,
    TodoListConfig,
};

/// Element holding an optional JSON config for the feature-rich list
const CONFIG_ELEMENT_ID: &str = "todolist-config";

fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).single().unwrap_or_default()
}

fn sample_items() -> Vec<TodoItem> {
    vec![
        TodoItem::new("1", "Learn the TodoList component", date(2024, 1, 1))
            .with_priority(Priority::High)
            .with_category("learning")
            .with_due_date(date(2024, 12, 31))
            .with_assigned_to("john"),
        {
            let mut item = TodoItem::new("2", "Build an awesome app", date(2024, 1, 2))
                .with_priority(Priority::Medium)
                .with_category("development")
                .completed(true);
            item.updated_at = date(2024, 1, 3);
            item
        },
        TodoItem::new("3", "Share with the community", date(2024, 1, 3))
            .with_priority(Priority::Low)
            .with_category("community")
            .with_assigned_to("jane"),
    ]
}

/// Config from the page, if the host embedded one
fn page_config() -> Option<TodoListConfig> {
    let text = web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()?;
    match TodoListConfig::from_json(&text) {
        Ok(config) => Some(config),
        Err(e) => {
            log::warn!("[APP] ignoring page config: {}", e);
            None
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (items, set_items) = signal(sample_items());
    let next_id = StoredValue::new(items.get_untracked().len() as u32 + 1);

    let on_add = move |text: String| {
        let id = next_id.get_value();
        next_id.set_value(id + 1);
        let item = TodoItem::new(id.to_string(), text, Utc::now())
            .with_priority(Priority::Medium)
            .with_category("general");
        log::info!("[APP] created item {}", item.id);
        set_items.update(|items| items.push(item));
    };

    let on_toggle = move |id: String| {
        set_items.update(|items| {
            if let Some(item) = items.iter_mut().find(|i| i.id == id) {
                item.completed = !item.completed;
                item.updated_at = Utc::now();
            }
        });
    };

    let on_delete = move |id: String| {
        set_items.update(|items| items.retain(|i| i.id != id));
    };

    let on_edit = move |(id, text): (String, String)| {
        set_items.update(|items| {
            if let Some(item) = items.iter_mut().find(|i| i.id == id) {
                item.text = text;
                item.updated_at = Utc::now();
            }
        });
    };

    let feature_rich = page_config().unwrap_or_else(|| TodoListConfig {
        placeholder: "What's on your mind?".to_string(),
        ..TodoListConfig::default()
            .with_all_columns()
            .with_sort(SortField::Priority, SortOrder::Desc)
    });

    let dark = TodoListConfig {
        theme: Theme::Dark,
        show_priority: true,
        show_category: true,
        max_items: Some(5),
        layout: Layout::Cards,
        ..TodoListConfig::default()
    };

    let read_only = TodoListConfig {
        allow_edit: false,
        allow_delete: false,
        ..TodoListConfig::default().with_all_columns()
    };

    let modal: SharedEditor = Arc::new(ModalEditor::default());

    view! {
        <div class="demo-app">
            <h1>"TodoList Component Examples"</h1>

            <section>
                <h2>"Basic"</h2>
                <TodoList
                    items=items
                    on_add=on_add
                    on_toggle=on_toggle
                    on_delete=on_delete
                    on_edit=on_edit
                />
            </section>

            <section>
                <h2>"Feature-Rich"</h2>
                <TodoList
                    items=items
                    config=feature_rich
                    on_add=on_add
                    on_toggle=on_toggle
                    on_delete=on_delete
                    on_edit=on_edit
                />
            </section>

            <section>
                <h2>"Dark Cards"</h2>
                <TodoList
                    items=items
                    config=dark
                    on_add=on_add
                    on_toggle=on_toggle
                    on_delete=on_delete
                    on_edit=on_edit
                />
            </section>

            <section>
                <h2>"Detail Editor"</h2>
                <TodoList
                    items=items
                    config=TodoListConfig::default().with_all_columns()
                    on_toggle=on_toggle
                    on_edit=on_edit
                    detail_editor=modal
                />
            </section>

            <section>
                <h2>"Read-Only"</h2>
                <TodoList items=items config=read_only />
            </section>
        </div>
    }
}
