use dioxus::prelude::*;

use crate::usecase::session::{Notice, NoticeLevel};

fn toast_colors(level: NoticeLevel) -> (&'static str, &'static str) {
    match level {
        NoticeLevel::Success => ("#e8f6ec", "#1e7b3a"),
        NoticeLevel::Warning => ("#fff6e0", "#8a5a00"),
        NoticeLevel::Error => ("#fdecec", "#a11d1d"),
    }
}

#[component]
pub fn Toast(notice: Notice, on_dismiss: EventHandler<()>) -> Element {
    let (background, color) = toast_colors(notice.level);
    let message = notice.message.clone();

    rsx! {
        div {
            style: "position: fixed; right: 16px; bottom: 16px; min-width: 240px; padding: 10px 14px; border-radius: 8px; background: {background}; color: {color}; box-shadow: 0 10px 24px rgba(0,0,0,0.15); z-index: 1200; display: flex; gap: 12px; align-items: center; justify-content: space-between;",
            span { "{message}" }
            button {
                style: "border: none; background: transparent; color: {color}; cursor: pointer; font-size: 16px;",
                onclick: move |_| on_dismiss.call(()),
                "×"
            }
        }
    }
}
