//! Simulation state of the animation: which bodies exist, what they are,
//! and the one-way flags that gate the scripted sequence.

use glyphfall_engine::api::types::EntityId;

/// What a tracked body is. Drives collision handling and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Glyph(char),
    BrainLeft,
    BrainRight,
    FragmentA,
    FragmentB,
}

impl BodyKind {
    /// Entity tag used in the scene.
    pub fn tag(self) -> &'static str {
        match self {
            BodyKind::Glyph(_) => "glyph",
            BodyKind::BrainLeft => "brain_left",
            BodyKind::BrainRight => "brain_right",
            BodyKind::FragmentA => "fragment_a",
            BodyKind::FragmentB => "fragment_b",
        }
    }

    /// Manifest sprite drawn for this kind. Glyphs are text-only.
    pub fn sprite_name(self) -> Option<&'static str> {
        match self {
            BodyKind::Glyph(_) => None,
            other => Some(other.tag()),
        }
    }

    pub fn is_brain(self) -> bool {
        matches!(self, BodyKind::BrainLeft | BodyKind::BrainRight)
    }
}

/// True for the unordered pair {BrainLeft, BrainRight}.
pub fn is_brain_pair(a: Option<BodyKind>, b: Option<BodyKind>) -> bool {
    matches!(
        (a, b),
        (Some(BodyKind::BrainLeft), Some(BodyKind::BrainRight))
            | (Some(BodyKind::BrainRight), Some(BodyKind::BrainLeft))
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mobility {
    Static,
    Dynamic,
}

/// A body the stage tracks, keyed by its entity id.
#[derive(Debug, Clone)]
pub struct StageBody {
    pub id: EntityId,
    pub kind: BodyKind,
    pub radius: f32,
    reacted: bool,
    mobility: Mobility,
}

impl StageBody {
    pub fn new(id: EntityId, kind: BodyKind, radius: f32, mobility: Mobility) -> Self {
        Self {
            id,
            kind,
            radius,
            reacted: false,
            mobility,
        }
    }

    pub fn reacted(&self) -> bool {
        self.reacted
    }

    pub fn mobility(&self) -> Mobility {
        self.mobility
    }

    /// Latch `reacted`. Returns true only on the false -> true transition.
    pub fn mark_reacted(&mut self) -> bool {
        let first = !self.reacted;
        self.reacted = true;
        first
    }

    /// Switch Static -> Dynamic. Returns true only on the first call.
    pub fn release(&mut self) -> bool {
        let first = self.mobility == Mobility::Static;
        self.mobility = Mobility::Dynamic;
        first
    }
}

/// Everything the scripted sequence mutates.
#[derive(Debug, Default)]
pub struct Stage {
    glyphs: Vec<StageBody>,
    actors: Vec<StageBody>,
    revealed: usize,
    explosion_fired: bool,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_glyph(&mut self, body: StageBody) {
        self.glyphs.push(body);
    }

    pub fn push_actor(&mut self, body: StageBody) {
        self.actors.push(body);
    }

    /// Glyph bodies in reading order.
    pub fn glyphs(&self) -> &[StageBody] {
        &self.glyphs
    }

    pub fn glyphs_mut(&mut self) -> &mut [StageBody] {
        &mut self.glyphs
    }

    /// Brains and fragments, in spawn order.
    pub fn actors(&self) -> &[StageBody] {
        &self.actors
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn all_revealed(&self) -> bool {
        self.revealed >= self.glyphs.len()
    }

    /// Reveal one more glyph. Returns false once every glyph is showing.
    pub fn reveal_next(&mut self) -> bool {
        if self.all_revealed() {
            return false;
        }
        self.revealed += 1;
        true
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        index < self.revealed
    }

    pub fn explosion_fired(&self) -> bool {
        self.explosion_fired
    }

    /// Set the explosion latch. Returns true only the first time.
    pub fn latch_explosion(&mut self) -> bool {
        let first = !self.explosion_fired;
        self.explosion_fired = true;
        first
    }

    pub fn brain_ids(&self) -> Vec<EntityId> {
        self.actors
            .iter()
            .filter(|b| b.kind.is_brain())
            .map(|b| b.id)
            .collect()
    }

    /// Every tracked body, glyphs first.
    pub fn bodies(&self) -> impl Iterator<Item = &StageBody> {
        self.glyphs.iter().chain(self.actors.iter())
    }

    pub fn body(&self, id: EntityId) -> Option<&StageBody> {
        self.bodies().find(|b| b.id == id)
    }

    pub fn body_mut(&mut self, id: EntityId) -> Option<&mut StageBody> {
        self.glyphs
            .iter_mut()
            .chain(self.actors.iter_mut())
            .find(|b| b.id == id)
    }

    /// Kind of a tracked body; untracked bodies (the ground) have none.
    pub fn kind_of(&self, id: EntityId) -> Option<BodyKind> {
        self.body(id).map(|b| b.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(id: u32, c: char) -> StageBody {
        StageBody::new(EntityId(id), BodyKind::Glyph(c), 10.0, Mobility::Static)
    }

    #[test]
    fn reveal_stops_at_glyph_count() {
        let mut stage = Stage::new();
        stage.push_glyph(glyph(1, 'a'));
        stage.push_glyph(glyph(2, 'b'));

        assert!(stage.reveal_next());
        assert!(stage.reveal_next());
        assert!(!stage.reveal_next());
        assert_eq!(stage.revealed(), 2);
        assert!(stage.all_revealed());
        assert!(stage.is_revealed(1));
        assert!(!stage.is_revealed(2));
    }

    #[test]
    fn empty_stage_is_fully_revealed() {
        let stage = Stage::new();
        assert!(stage.all_revealed());
    }

    #[test]
    fn latches_only_transition_once() {
        let mut body = glyph(1, 'x');
        assert!(body.mark_reacted());
        assert!(!body.mark_reacted());
        assert!(body.reacted());

        assert!(body.release());
        assert!(!body.release());
        assert_eq!(body.mobility(), Mobility::Dynamic);

        let mut stage = Stage::new();
        assert!(stage.latch_explosion());
        assert!(!stage.latch_explosion());
        assert!(stage.explosion_fired());
    }

    #[test]
    fn brain_pair_is_unordered_and_exact() {
        let l = Some(BodyKind::BrainLeft);
        let r = Some(BodyKind::BrainRight);
        assert!(is_brain_pair(l, r));
        assert!(is_brain_pair(r, l));
        assert!(!is_brain_pair(l, l));
        assert!(!is_brain_pair(l, Some(BodyKind::FragmentA)));
        assert!(!is_brain_pair(l, None));
    }

    #[test]
    fn lookup_spans_glyphs_and_actors() {
        let mut stage = Stage::new();
        stage.push_glyph(glyph(1, 'a'));
        stage.push_actor(StageBody::new(
            EntityId(2),
            BodyKind::BrainLeft,
            120.0,
            Mobility::Dynamic,
        ));

        assert_eq!(stage.kind_of(EntityId(1)), Some(BodyKind::Glyph('a')));
        assert_eq!(stage.kind_of(EntityId(2)), Some(BodyKind::BrainLeft));
        assert_eq!(stage.kind_of(EntityId(3)), None);
        assert_eq!(stage.brain_ids(), vec![EntityId(2)]);
        assert!(stage.body_mut(EntityId(2)).is_some());
    }

    #[test]
    fn only_actors_have_sprites() {
        assert_eq!(BodyKind::Glyph('a').sprite_name(), None);
        assert_eq!(BodyKind::FragmentB.sprite_name(), Some("fragment_b"));
        assert_eq!(BodyKind::Glyph('a').tag(), "glyph");
    }
}
