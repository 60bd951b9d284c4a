//! Tuning constants for the animation, gathered in one struct.
//!
//! Units are world pixels, seconds and radians; the world is Y-down.

use glam::Vec2;
use glyphfall_engine::ColliderMaterial;

pub const DEFAULT_TEXT: &str = "Hi there❕                                              We are Sparkool, an independent creative design team based in Tokyo. ";

/// Every fixed parameter of the stage.
#[derive(Debug, Clone)]
pub struct StageConfig {
    pub text: String,
    pub seed: u64,
    pub fixed_dt: f32,
    /// World size used until the page reports its viewport.
    pub fallback_world: Vec2,
    pub gravity: f32,

    // -- text layout --
    pub glyph_radius: f32,
    pub glyph_spacing: f32,
    /// Top-left cursor position of the first glyph; wraps return to `origin.x`.
    pub origin: Vec2,
    pub line_height: f32,
    /// Lines wrap once the cursor passes `world width - wrap_margin`.
    pub wrap_margin: f32,
    pub font_size: f32,
    pub glyph_material: ColliderMaterial,
    pub glyph_damping: f32,

    // -- reveal --
    pub reveal_interval: f32,
    pub spawn_delay: f32,

    // -- brains --
    pub brain_radius: f32,
    /// Vertical offset of the right brain below the screen midline.
    pub brain_right_offset: f32,
    pub brain_speed: f32,
    pub brain_material: ColliderMaterial,
    pub actor_damping: f32,
    /// Release velocity: x in ±release_x, y in [0, release_y).
    pub release_x: f32,
    pub release_y: f32,

    // -- reactions --
    /// First-contact spin: ±glyph_spin.
    pub glyph_spin: f32,
    /// Post-explosion settle spin: [-settle_spin, 0).
    pub settle_spin: f32,
    /// Brain spin after the explosion: [-brain_spin, 0).
    pub brain_spin: f32,

    // -- explosion --
    pub fragment_offset: f32,
    pub fragment_a_radius: f32,
    pub fragment_b_radius: f32,
    pub fragment_material: ColliderMaterial,
    /// Horizontal and vertical push applied to brains away from the impact.
    pub push: Vec2,

    // -- ground --
    pub ground_thickness: f32,

    // -- rendering --
    /// On-screen size of brain images relative to their source size.
    pub brain_sprite_scale: f32,
    /// On-screen size of fragment images relative to their source size.
    pub fragment_sprite_scale: f32,

    // -- pointer drag --
    pub drag_stiffness: f32,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT.to_string(),
            seed: 0x5eed_f00d,
            fixed_dt: 1.0 / 60.0,
            fallback_world: Vec2::new(1280.0, 720.0),
            gravity: 300.0,

            glyph_radius: 10.0,
            glyph_spacing: 5.0,
            origin: Vec2::new(50.0, 50.0),
            line_height: 25.0,
            wrap_margin: 100.0,
            font_size: 20.0,
            glyph_material: ColliderMaterial {
                restitution: 0.75,
                friction: 0.05,
                density: 1.0,
            },
            glyph_damping: 0.06,

            reveal_interval: 0.05,
            spawn_delay: 2.0,

            brain_radius: 120.0,
            brain_right_offset: 10.0,
            brain_speed: 600.0,
            brain_material: ColliderMaterial {
                restitution: 0.9,
                friction: 0.05,
                density: 1.0,
            },
            actor_damping: 0.6,
            release_x: 90.0,
            release_y: 60.0,

            glyph_spin: 6.0,
            settle_spin: 0.6,
            brain_spin: 0.6,

            fragment_offset: 30.0,
            fragment_a_radius: 20.0,
            fragment_b_radius: 80.0,
            fragment_material: ColliderMaterial {
                restitution: 0.3,
                friction: 0.05,
                density: 1.0,
            },
            push: Vec2::new(24.0, 60.0),

            ground_thickness: 40.0,

            brain_sprite_scale: 0.3,
            fragment_sprite_scale: 0.1,

            drag_stiffness: 0.2,
        }
    }
}

impl StageConfig {
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Distance the layout cursor moves per glyph.
    pub fn advance(&self) -> f32 {
        2.0 * self.glyph_radius + self.glyph_spacing
    }
}
