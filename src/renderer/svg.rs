//! SVG sprite and HUD updates

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::sim::{Body, GameState};
use crate::ui::{MarkerChange, banner_visible, goal_marker_changes, highscore_text, score_text, sprites};

const HIDDEN: &str = "hidden";

/// Draws state snapshots into the page's SVG board
pub struct SvgRenderer {
    document: Document,
    svg: Element,
}

impl SvgRenderer {
    /// Returns `None` if the page has no `#svgCanvas`
    pub fn new(document: Document) -> Option<Self> {
        let svg = document.get_element_by_id("svgCanvas")?;
        Some(Self { document, svg })
    }

    pub fn render(&self, state: &GameState) {
        for body in sprites(state) {
            if let Err(e) = self.draw(body) {
                log::warn!("Failed to draw {}: {:?}", body.id, e);
            }
        }

        for (i, change) in goal_marker_changes(state).iter().enumerate() {
            let id = format!("frogEnd{}", i + 1);
            match change {
                MarkerChange::Show => self.set_hidden(&id, false),
                MarkerChange::Hide => self.set_hidden(&id, true),
                MarkerChange::Keep => {}
            }
        }

        self.set_hidden("gameEnd", !banner_visible(state));
        self.set_text("score", &score_text(state));
        self.set_text("highscore", &highscore_text(state));
    }

    /// Add the sprite on first sight, otherwise move it
    fn draw(&self, body: &Body) -> Result<(), JsValue> {
        if let Some(el) = self.document.get_element_by_id(&body.id) {
            el.set_attribute("x", &body.pos.x.to_string())?;
            el.set_attribute("y", &body.pos.y.to_string())?;
            return Ok(());
        }

        let ns = self.svg.namespace_uri();
        let el = self.document.create_element_ns(ns.as_deref(), "image")?;
        el.set_attribute("id", &body.id)?;
        el.set_attribute("href", &body.img)?;
        el.set_attribute("width", &body.width.to_string())?;
        el.set_attribute("height", &body.height.to_string())?;
        el.set_attribute("x", &body.pos.x.to_string())?;
        el.set_attribute("y", &body.pos.y.to_string())?;
        self.svg.append_child(&el)?;
        Ok(())
    }

    fn set_hidden(&self, id: &str, hidden: bool) {
        if let Some(el) = self.document.get_element_by_id(id) {
            let classes = el.class_list();
            let _ = if hidden {
                classes.add_1(HIDDEN)
            } else {
                classes.remove_1(HIDDEN)
            };
        }
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }
}
