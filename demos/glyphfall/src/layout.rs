//! Text layout: one pinned circular body per character, wrapped on spaces.

use glam::Vec2;
use glyphfall_engine::api::types::EntityId;
use glyphfall_engine::{
    glyph_sprite, BodyDesc, BodyType, ColliderDesc, EngineContext, Entity, FontConfig,
};

use crate::config::StageConfig;
use crate::stage::{BodyKind, Mobility, Stage, StageBody};

#[derive(Debug, Clone)]
pub struct LayoutParams {
    pub radius: f32,
    pub spacing: f32,
    pub max_line_width: f32,
    pub start: Vec2,
    pub line_height: f32,
}

impl LayoutParams {
    pub fn for_world(config: &StageConfig, world: Vec2) -> Self {
        Self {
            radius: config.glyph_radius,
            spacing: config.glyph_spacing,
            max_line_width: world.x - config.wrap_margin,
            start: config.origin,
            line_height: config.line_height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphPlacement {
    pub glyph: char,
    pub pos: Vec2,
}

/// Place every character of `text` in reading order.
///
/// A line only breaks on a space whose circle would cross `max_line_width`;
/// unbroken runs overflow.
pub fn layout_glyphs(text: &str, params: &LayoutParams) -> Vec<GlyphPlacement> {
    let advance = 2.0 * params.radius + params.spacing;
    let mut cursor = params.start;

    text.chars()
        .map(|glyph| {
            if glyph == ' ' && cursor.x + 2.0 * params.radius > params.max_line_width {
                cursor.x = params.start.x;
                cursor.y += params.line_height;
            }
            let placed = GlyphPlacement { glyph, pos: cursor };
            cursor.x += advance;
            placed
        })
        .collect()
}

/// Insert one pinned, hidden glyph body per placement.
pub fn spawn_glyphs(
    ctx: &mut EngineContext,
    stage: &mut Stage,
    placements: &[GlyphPlacement],
    config: &StageConfig,
) -> Vec<EntityId> {
    let font = FontConfig::default().with_size(config.font_size);

    placements
        .iter()
        .map(|placed| {
            let id = ctx.next_id();
            let kind = BodyKind::Glyph(placed.glyph);
            let mut entity = Entity::new(id)
                .with_tag(kind.tag())
                .with_size(font.size)
                .with_visible(false);
            if let Some(sprite) = glyph_sprite(placed.glyph, &font) {
                entity = entity.with_sprite(sprite);
            }

            let desc = BodyDesc::dynamic(ColliderDesc::Ball {
                radius: config.glyph_radius,
            })
            .with_body_type(BodyType::Fixed)
            .with_position(placed.pos)
            .with_linear_damping(config.glyph_damping);

            ctx.spawn_with_body(entity, desc, config.glyph_material);
            stage.push_glyph(StageBody::new(id, kind, config.glyph_radius, Mobility::Static));
            id
        })
        .collect()
}
