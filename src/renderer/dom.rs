//! DOM painter
//!
//! Particles are absolutely positioned `div`s inside a layer element; the HUD,
//! select panel and game-over panel are plain elements toggled with a
//! `hidden` class. Particle elements are pooled and reused between frames.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use super::frame::{ParticleView, RenderFrame};
use crate::settings::Difficulty;

/// Attribute carrying the particle id, read back by the click handler
pub const PARTICLE_ID_ATTR: &str = "data-id";

/// Handles to every element the game writes to
pub struct DomView {
    root: HtmlElement,
    score: Element,
    level: Element,
    time_left: Element,
    select_panel: Element,
    difficulty_buttons: Vec<(Difficulty, HtmlElement)>,
    start_button: HtmlElement,
    particle_layer: HtmlElement,
    particle_pool: Vec<HtmlElement>,
    game_over_panel: Element,
    final_score: Element,
    play_again_button: HtmlElement,
}

fn create(document: &Document, tag: &str, class: &str) -> Result<HtmlElement, JsValue> {
    let el: HtmlElement = document.create_element(tag)?.dyn_into()?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el)
}

fn set_hidden(el: &Element, hidden: bool) -> Result<(), JsValue> {
    el.class_list().toggle_with_force("hidden", hidden)?;
    Ok(())
}

impl DomView {
    /// Build the game's DOM under `<body>`
    pub fn new(document: &Document) -> Result<Self, JsValue> {
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;

        let root = create(document, "div", "quantum-realm")?;
        for layer in ["stars", "twinkling", "clouds"] {
            root.append_child(&create(document, "div", layer)?)?;
        }

        let title = create(document, "h1", "")?;
        title.set_text_content(Some("Quantum Particle Catcher"));
        root.append_child(&title)?;

        // HUD
        let hud = create(document, "div", "game-info")?;
        let score = create(document, "p", "")?;
        let level = create(document, "p", "")?;
        let time_left = create(document, "p", "")?;
        hud.append_child(&score)?;
        hud.append_child(&level)?;
        hud.append_child(&time_left)?;
        root.append_child(&hud)?;

        // Difficulty select
        let select_panel = create(document, "div", "level-select")?;
        let heading = create(document, "h2", "")?;
        heading.set_text_content(Some("Select Difficulty"));
        select_panel.append_child(&heading)?;
        let mut difficulty_buttons = Vec::with_capacity(Difficulty::ALL.len());
        for difficulty in Difficulty::ALL {
            let button = create(document, "button", "difficulty-button")?;
            button.set_text_content(Some(difficulty.as_str()));
            select_panel.append_child(&button)?;
            difficulty_buttons.push((difficulty, button));
        }
        let start_button = create(document, "button", "start-button")?;
        start_button.set_text_content(Some("Start Game"));
        select_panel.append_child(&start_button)?;
        root.append_child(&select_panel)?;

        let particle_layer = create(document, "div", "particle-layer")?;
        root.append_child(&particle_layer)?;

        // Game over
        let game_over_panel = create(document, "div", "game-over")?;
        let heading = create(document, "h2", "")?;
        heading.set_text_content(Some("Game Over"));
        game_over_panel.append_child(&heading)?;
        let final_score = create(document, "p", "")?;
        game_over_panel.append_child(&final_score)?;
        let play_again_button = create(document, "button", "start-button")?;
        play_again_button.set_text_content(Some("Play Again"));
        game_over_panel.append_child(&play_again_button)?;
        root.append_child(&game_over_panel)?;

        body.append_child(&root)?;

        Ok(Self {
            root,
            score: score.into(),
            level: level.into(),
            time_left: time_left.into(),
            select_panel: select_panel.into(),
            difficulty_buttons,
            start_button,
            particle_layer,
            particle_pool: Vec::new(),
            game_over_panel: game_over_panel.into(),
            final_score: final_score.into(),
            play_again_button,
        })
    }

    pub fn difficulty_buttons(&self) -> &[(Difficulty, HtmlElement)] {
        &self.difficulty_buttons
    }

    pub fn start_button(&self) -> &HtmlElement {
        &self.start_button
    }

    pub fn play_again_button(&self) -> &HtmlElement {
        &self.play_again_button
    }

    /// Container receiving all particle clicks
    pub fn particle_layer(&self) -> &HtmlElement {
        &self.particle_layer
    }

    /// Draw one frame
    pub fn render(&mut self, frame: &RenderFrame) -> Result<(), JsValue> {
        let hud = &frame.hud;
        self.score
            .set_text_content(Some(&format!("Score: {}", hud.score)));
        self.level
            .set_text_content(Some(&format!("Level: {}", hud.level)));
        self.time_left
            .set_text_content(Some(&format!("Time Left: {}s", hud.time_left)));

        set_hidden(&self.select_panel, !hud.show_select)?;
        for (difficulty, button) in &self.difficulty_buttons {
            button
                .class_list()
                .toggle_with_force("selected", *difficulty == hud.difficulty)?;
        }

        set_hidden(&self.game_over_panel, !hud.game_over)?;
        if hud.game_over {
            self.final_score
                .set_text_content(Some(&format!("Final Score: {}", hud.score)));
        }

        set_hidden(&self.particle_layer, !hud.active)?;
        self.render_particles(&frame.particles)
    }

    fn render_particles(&mut self, particles: &[ParticleView]) -> Result<(), JsValue> {
        let document = self
            .root
            .owner_document()
            .ok_or_else(|| JsValue::from_str("detached root"))?;

        while self.particle_pool.len() < particles.len() {
            let el = create(&document, "div", "particle")?;
            self.particle_layer.append_child(&el)?;
            self.particle_pool.push(el);
        }

        for (el, view) in self.particle_pool.iter().zip(particles) {
            el.set_class_name(&format!("particle {}", view.kind.as_str()));
            el.set_attribute(PARTICLE_ID_ATTR, &view.id.to_string())?;
            let style = el.style();
            style.set_property("display", "block")?;
            style.set_property("left", &format!("{}px", view.x))?;
            style.set_property("top", &format!("{}px", view.y))?;
            style.set_property("width", &format!("{}px", view.size))?;
            style.set_property("height", &format!("{}px", view.size))?;
            style.set_property("background-color", &view.color)?;
            style.set_property("transform", &format!("rotate({}deg)", view.rotation))?;
        }

        // Unused pool entries stay in the DOM, hidden and unclickable
        for el in self.particle_pool.iter().skip(particles.len()) {
            el.style().set_property("display", "none")?;
            el.remove_attribute(PARTICLE_ID_ATTR)?;
        }

        Ok(())
    }

    /// Remove everything this view added to the page
    pub fn detach(&self) {
        self.root.remove();
    }
}

/// Particle id under a click, if the click landed on a particle
pub fn particle_id_from_event(event: &web_sys::Event) -> Option<u32> {
    let target: Element = event.target()?.dyn_into().ok()?;
    let particle = target.closest(".particle").ok()??;
    particle.get_attribute(PARTICLE_ID_ATTR)?.parse().ok()
}
