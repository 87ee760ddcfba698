//! Set planner
//!
//! Expands an event-level request into concrete per-piece parameter sets via a
//! deterministic rule table keyed by event type and guest count. Free-text
//! special requirements never branch planning logic; they stay advisory so a
//! given request always plans the same set.

use atelier_core::{
    BudgetRange, CraftsmanshipLevel, Culture, ErgonomicProfile, EventType, Formality,
    FurnitureType, Material, ParameterPatch, ParametricParameters, StylePreset,
    UserFurnitureRequest,
};
use atelier_rules::rules_for;
use tracing::debug;

/// Guests seated per table at a given formality
pub fn table_capacity(formality: Formality) -> u32 {
    match formality {
        Formality::Casual => 8,
        Formality::SemiFormal => 6,
        Formality::Formal => 6,
        Formality::Ceremonial => 4,
    }
}

/// Expand a request into resolved per-piece parameter sets.
///
/// Chair count is guest_count rounded up to the next multiple of the table
/// capacity; every piece carries the request's culture and formality and a
/// budget-derived material and craftsmanship level. Each set has passed
/// through the constraint resolver.
pub fn plan(request: &UserFurnitureRequest) -> Vec<ParametricParameters> {
    // Nobody to seat, nothing to plan
    if request.guest_count == 0 {
        debug!(event = request.event_type.label(), "Empty plan for zero guests");
        return Vec::new();
    }

    let capacity = table_capacity(request.formality_level);
    let table_count = request.guest_count.div_ceil(capacity);
    let chair_count = table_count * capacity;

    let table_type = match request.event_type {
        EventType::TeaCeremony => FurnitureType::CoffeeTable,
        EventType::Reception => FurnitureType::SideTable,
        _ => FurnitureType::DiningTable,
    };

    let mut pieces = Vec::with_capacity((table_count + chair_count + 2) as usize);
    for _ in 0..table_count {
        pieces.push(piece(request, table_type, Some(capacity)));
    }
    for _ in 0..chair_count {
        pieces.push(piece(request, FurnitureType::Chair, None));
    }

    // Event-specific extras beyond the seated core
    match request.event_type {
        EventType::Reception => {
            for _ in 0..table_count {
                pieces.push(piece(request, FurnitureType::Bench, None));
            }
        }
        EventType::FamilyGathering => {
            pieces.push(piece(request, FurnitureType::Sofa, None));
        }
        _ => {}
    }

    debug!(
        event = request.event_type.label(),
        guests = request.guest_count,
        tables = table_count,
        chairs = chair_count,
        total = pieces.len(),
        "Planned furniture set"
    );

    pieces
}

fn piece(
    request: &UserFurnitureRequest,
    furniture_type: FurnitureType,
    seats: Option<u32>,
) -> ParametricParameters {
    let mut params = ParametricParameters::new(furniture_type, request.culture)
        .with_style(style_for(request.event_type, request.formality_level))
        .with_formality(request.formality_level)
        .with_material(material_for(request.culture, request.budget))
        .with_craftsmanship(craftsmanship_for(request.budget))
        .with_intensity(intensity_for(request.formality_level));
    params.color_palette.clear();
    params.ergonomic_profile = match request.event_type {
        // Tea ceremony seating sits close to the floor
        EventType::TeaCeremony => ErgonomicProfile::Compact,
        _ => ErgonomicProfile::Average,
    };

    if let Some(seats) = seats {
        // 0.6 m of table edge per seat on the long sides, capped by the room
        params.width = (seats as f64 / 2.0 * 0.6 + 0.4).min(request.space.width * 0.6);
    }

    // Resolver clamps dimensions, seeds the palette from the culture exemplar,
    // and reconciles intensity with craftsmanship
    crate::resolver::resolve(&params, &ParameterPatch::empty()).parameters
}

fn craftsmanship_for(budget: BudgetRange) -> CraftsmanshipLevel {
    match budget {
        BudgetRange::Economy => CraftsmanshipLevel::Simple,
        BudgetRange::Standard | BudgetRange::Premium => CraftsmanshipLevel::Refined,
        BudgetRange::Luxury => CraftsmanshipLevel::Masterwork,
    }
}

fn material_for(culture: Culture, budget: BudgetRange) -> Material {
    let preferred = rules_for(culture).preferred_materials();
    let index = match budget {
        BudgetRange::Economy => 0,
        BudgetRange::Standard => 1,
        BudgetRange::Premium => 2,
        BudgetRange::Luxury => 3,
    };
    preferred
        .get(index.min(preferred.len().saturating_sub(1)))
        .copied()
        .unwrap_or(Material::Oak)
}

fn intensity_for(formality: Formality) -> f64 {
    match formality {
        Formality::Casual => 0.3,
        Formality::SemiFormal => 0.45,
        Formality::Formal => 0.6,
        Formality::Ceremonial => 0.75,
    }
}

fn style_for(event_type: EventType, formality: Formality) -> StylePreset {
    match (event_type, formality) {
        (EventType::TeaCeremony, _) => StylePreset::Traditional,
        (EventType::Conference, _) => StylePreset::Minimalist,
        (_, Formality::Ceremonial) => StylePreset::Ornate,
        (_, Formality::Formal) => StylePreset::Elegant,
        (_, Formality::SemiFormal) => StylePreset::Contemporary,
        (_, Formality::Casual) => StylePreset::Contemporary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(pieces: &[ParametricParameters], furniture_type: FurnitureType) -> usize {
        pieces
            .iter()
            .filter(|p| p.furniture_type == furniture_type)
            .count()
    }

    /// The documented scenario: formal dinner, Japanese, six guests.
    #[test]
    fn test_formal_dinner_for_six() {
        let request = UserFurnitureRequest::new(EventType::FormalDinner, Culture::Japanese, 6)
            .with_formality(Formality::Formal);
        let pieces = plan(&request);

        assert_eq!(count(&pieces, FurnitureType::DiningTable), 1);
        assert_eq!(count(&pieces, FurnitureType::Chair), 6);
        for piece in &pieces {
            assert_eq!(piece.culture, Culture::Japanese);
            assert_eq!(piece.formality, Formality::Formal);
        }
    }

    /// Capacity law: chair count is the minimal capacity multiple >= guests.
    #[test]
    fn test_capacity_law() {
        for event_type in [
            EventType::FormalDinner,
            EventType::CasualDining,
            EventType::TeaCeremony,
            EventType::Reception,
            EventType::FamilyGathering,
            EventType::Conference,
        ] {
            for formality in [
                Formality::Casual,
                Formality::SemiFormal,
                Formality::Formal,
                Formality::Ceremonial,
            ] {
                for guests in [0u32, 1, 3, 4, 6, 7, 8, 13, 25] {
                    let request =
                        UserFurnitureRequest::new(event_type, Culture::Modern, guests)
                            .with_formality(formality);
                    let chairs = count(&plan(&request), FurnitureType::Chair) as u32;
                    let capacity = table_capacity(formality);

                    assert!(chairs >= guests);
                    assert_eq!(chairs % capacity, 0);
                    assert!(chairs - guests < capacity, "not minimal: {chairs} for {guests}");
                }
            }
        }
    }

    #[test]
    fn test_zero_guests_plans_nothing() {
        let request = UserFurnitureRequest::new(EventType::FamilyGathering, Culture::Modern, 0);
        assert!(plan(&request).is_empty());
    }

    #[test]
    fn test_planning_is_deterministic() {
        let request = UserFurnitureRequest::new(EventType::Reception, Culture::French, 14);
        assert_eq!(plan(&request), plan(&request));
    }

    #[test]
    fn test_special_requirements_do_not_branch() {
        let plain = UserFurnitureRequest::new(EventType::FormalDinner, Culture::Italian, 8);
        let with_text = plain
            .clone()
            .with_special_requirements("make everything out of glass");
        assert_eq!(plan(&plain), plan(&with_text));
    }

    #[test]
    fn test_budget_drives_craftsmanship() {
        let economy = UserFurnitureRequest::new(EventType::CasualDining, Culture::Scandinavian, 4)
            .with_budget(BudgetRange::Economy);
        let luxury = economy.clone().with_budget(BudgetRange::Luxury);

        assert!(plan(&economy)
            .iter()
            .all(|p| p.craftsmanship_level == CraftsmanshipLevel::Simple));
        assert!(plan(&luxury)
            .iter()
            .all(|p| p.craftsmanship_level == CraftsmanshipLevel::Masterwork));
    }

    #[test]
    fn test_tea_ceremony_uses_low_tables() {
        let request = UserFurnitureRequest::new(EventType::TeaCeremony, Culture::Japanese, 4)
            .with_formality(Formality::Ceremonial);
        let pieces = plan(&request);
        assert!(count(&pieces, FurnitureType::CoffeeTable) >= 1);
        assert_eq!(count(&pieces, FurnitureType::DiningTable), 0);
    }

    #[test]
    fn test_family_gathering_adds_sofa() {
        let request = UserFurnitureRequest::new(EventType::FamilyGathering, Culture::French, 5);
        assert_eq!(count(&plan(&request), FurnitureType::Sofa), 1);
    }

    #[test]
    fn test_planned_pieces_are_resolved() {
        // Every planned piece must already satisfy the resolver's invariants
        let request = UserFurnitureRequest::new(EventType::FormalDinner, Culture::Japanese, 12)
            .with_budget(BudgetRange::Luxury)
            .with_formality(Formality::Ceremonial);
        for piece in plan(&request) {
            let re = crate::resolver::resolve(&piece, &ParameterPatch::empty());
            assert_eq!(re.parameters, piece);
            assert!(re.notes.is_empty());
        }
    }

    #[test]
    fn test_table_width_respects_room() {
        let small_room = atelier_core::SpaceDimensions {
            width: 2.0,
            height: 2.4,
            depth: 2.0,
        };
        let request = UserFurnitureRequest::new(EventType::FormalDinner, Culture::Modern, 24)
            .with_space(small_room);
        for piece in plan(&request) {
            if piece.furniture_type.is_table() {
                assert!(piece.width <= 2.0 * 0.6 + 1e-9);
            }
        }
    }
}
