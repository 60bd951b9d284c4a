use crate::components::entity::Entity;
use crate::components::sprite::{AtlasId, SpriteComponent};
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Build the frame's render buffer from the scene.
///
/// Two passes in scene order: font-atlas sprites first (text), then every
/// other atlas (images). `atlas_split` marks the boundary. Hidden entities
/// and entities without a sprite emit nothing.
pub fn build_render_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity> + Clone,
    buffer: &mut RenderBuffer,
) {
    buffer.clear();

    let drawable = entities.filter(|e| e.visible);

    let mut text_count = 0u32;
    for entity in drawable.clone() {
        if let Some(sprite) = entity.sprite.as_ref().filter(|s| s.atlas == AtlasId::FONT) {
            if buffer.push(instance_for(entity, sprite)) {
                text_count += 1;
            }
        }
    }
    buffer.set_atlas_split(text_count);

    for entity in drawable {
        if let Some(sprite) = entity.sprite.as_ref().filter(|s| s.atlas != AtlasId::FONT) {
            buffer.push(instance_for(entity, sprite));
        }
    }
}

fn instance_for(entity: &Entity, sprite: &SpriteComponent) -> RenderInstance {
    RenderInstance {
        x: entity.pos.x,
        y: entity.pos.y,
        rotation: entity.rotation,
        size: entity.size,
        sprite_col: sprite.col,
        alpha: sprite.alpha,
        cell_span: sprite.cell_span,
        atlas_row: sprite.row,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use glam::Vec2;

    fn glyph(id: u32, x: f32) -> Entity {
        Entity::new(EntityId(id))
            .with_pos(Vec2::new(x, 50.0))
            .with_size(20.0)
            .with_sprite(SpriteComponent {
                atlas: AtlasId::FONT,
                ..Default::default()
            })
    }

    fn image(id: u32, x: f32) -> Entity {
        Entity::new(EntityId(id))
            .with_pos(Vec2::new(x, 300.0))
            .with_size(240.0)
            .with_sprite(SpriteComponent::default())
    }

    #[test]
    fn text_pass_precedes_image_pass() {
        // Image spawned before text still lands after it.
        let entities = vec![image(1, 0.0), glyph(2, 50.0), glyph(3, 75.0)];

        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &mut buffer);

        assert_eq!(buffer.instance_count(), 3);
        assert_eq!(buffer.atlas_split, 2);
        assert_eq!(buffer.instances[0].x, 50.0);
        assert_eq!(buffer.instances[1].x, 75.0);
        assert_eq!(buffer.instances[2].size, 240.0);
    }

    #[test]
    fn hidden_and_spriteless_entities_are_skipped() {
        let entities = vec![
            glyph(1, 50.0).with_visible(false),
            Entity::new(EntityId(2)),
            image(3, 0.0),
        ];
        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &mut buffer);
        assert_eq!(buffer.instance_count(), 1);
        assert_eq!(buffer.atlas_split, 0);
    }

    #[test]
    fn rotation_is_carried_through() {
        let mut e = image(1, 10.0);
        e.rotation = 1.25;
        let entities = vec![e];
        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &mut buffer);
        assert_eq!(buffer.instances[0].rotation, 1.25);
    }
}
