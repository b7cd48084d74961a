use crate::constants::*;
use crate::dom;
use patatap_core::KeyMap;
use web_sys as web;

/// Colored "PATATAP" heading.
pub fn render_title(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(TITLE_ID) {
        let html: String = TITLE_LETTERS
            .iter()
            .enumerate()
            .map(|(i, letter)| {
                format!(
                    "<span style='color: {}'>{}</span>",
                    TITLE_COLORS[i % TITLE_COLORS.len()],
                    letter
                )
            })
            .collect();
        el.set_inner_html(&html);
    }
}

/// "Try these" pills, one per featured key, dotted with that key's color.
pub fn render_legend(document: &web::Document, key_map: &KeyMap) {
    if let Some(el) = document.get_element_by_id(LEGEND_ID) {
        let pills: String = FEATURED_KEYS
            .iter()
            .map(|&letter| {
                let color = key_map
                    .lookup(letter)
                    .map(|e| e.color.to_hex())
                    .unwrap_or_else(|| "#ffffff".to_string());
                format!(
                    "<div class='key-pill'><span class='dot' style='background-color: {}'></span><span class='label'>{}</span></div>",
                    color, letter
                )
            })
            .collect();
        el.set_inner_html(&format!(
            "<div class='helper-header'>Try these</div><div class='key-grid'>{}</div><div class='hint'>Hold a key to layer sounds and visuals.</div>",
            pills
        ));
    }
}

pub fn set_now_playing(document: &web::Document, letter: Option<char>) {
    if let Some(el) = document.get_element_by_id(NOW_PLAYING_ID) {
        match letter {
            Some(l) => {
                el.set_inner_html(&format!(
                    "<span class='label'>Now playing</span><span class='letter'>{}</span>",
                    l
                ));
                _ = el.set_attribute("style", "");
            }
            None => {
                el.set_inner_html("");
                _ = el.set_attribute("style", "display:none");
            }
        }
    }
}

#[inline]
pub fn set_legend_faded(document: &web::Document, faded: bool) {
    dom::set_class(document, LEGEND_ID, "faded", faded);
}

/// Auto-play card is only shown in season.
pub fn show_auto_card(document: &web::Document, visible: bool) {
    if let Some(el) = document.get_element_by_id(AUTO_CARD_ID) {
        _ = el.set_attribute("style", if visible { "" } else { "display:none" });
    }
}

pub fn set_auto_status(document: &web::Document, playing: bool) {
    if let Some(el) = document.get_element_by_id(AUTO_STATUS_ID) {
        el.set_text_content(Some(if playing { "Playing" } else { "Idle" }));
        let cl = el.class_list();
        _ = cl.toggle_with_force("on", playing);
        _ = cl.toggle_with_force("off", !playing);
    }
    if let Some(el) = document.get_element_by_id(AUTO_BUTTON_ID) {
        el.set_text_content(Some(if playing {
            "Stop Auto Play"
        } else {
            "Start Auto Play"
        }));
        let cl = el.class_list();
        _ = cl.toggle_with_force("stop", playing);
        _ = cl.toggle_with_force("start", !playing);
    }
}

#[inline]
pub fn set_menu_open(document: &web::Document, open: bool) {
    dom::set_class(document, DRAWER_ID, "open", open);
    dom::set_class(document, MENU_BUTTON_ID, "is-open", open);
    if let Some(el) = document.get_element_by_id(DRAWER_ID) {
        _ = el.set_attribute("aria-hidden", if open { "false" } else { "true" });
    }
}

#[inline]
pub fn is_menu_open(document: &web::Document) -> bool {
    document
        .get_element_by_id(DRAWER_ID)
        .map(|el| el.class_list().contains("open"))
        .unwrap_or(false)
}
