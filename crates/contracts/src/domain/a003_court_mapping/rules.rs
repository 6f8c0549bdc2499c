//! Правила назначения позиций дочерним кортам.
//!
//! Родитель с `sub_court_count = N` предоставляет позиции `1..=N`. Каждую позицию
//! может занимать не более одного потомка. Потомок должен находиться на той же
//! площадке, иметь строго меньший уровень и не большую вместимость.

use std::collections::BTreeSet;

use thiserror::Error;

use super::aggregate::{CourtMapping, CourtMappingDto};
use crate::domain::a002_court::Court;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("Выберите родительский корт")]
    ParentNotSelected,
    #[error("Выберите дочерний корт")]
    ChildNotSelected,
    #[error("Родительский корт не найден")]
    ParentNotFound,
    #[error("Дочерний корт не найден")]
    ChildNotFound,
    #[error("Корт не может быть дочерним сам для себя")]
    SelfMapping,
    #[error("Дочерний корт должен находиться на той же площадке")]
    VenueMismatch,
    #[error("Уровень дочернего корта ({child}) должен быть ниже уровня родителя ({parent})")]
    LevelNotLower { parent: u32, child: u32 },
    #[error("Вместимость дочернего корта ({child}) превышает вместимость родителя ({parent})")]
    CapacityExceeded { parent: u32, child: u32 },
    #[error("У родительского корта нет дочерних позиций")]
    NoSlots,
    #[error("Позиция {position} вне диапазона 1..{max}")]
    PositionOutOfRange { position: u32, max: u32 },
    #[error("Позиция {0} уже занята")]
    PositionTaken(u32),
    #[error("Этот корт уже привязан к выбранному родителю")]
    DuplicateChild,
}

/// Все позиции родителя: `1..=sub_court_count`
pub fn slot_positions(parent: &Court) -> Vec<u32> {
    (1..=parent.sub_court_count).collect()
}

fn siblings<'a>(
    parent_id: &'a str,
    mappings: &'a [CourtMapping],
    exclude_mapping_id: Option<&'a str>,
) -> impl Iterator<Item = &'a CourtMapping> + 'a {
    mappings
        .iter()
        .filter(move |m| m.parent_court_id == parent_id)
        .filter(move |m| Some(m.id.as_str()) != exclude_mapping_id)
}

/// Позиции, уже занятые потомками `parent_id`, без редактируемого маппинга
pub fn used_positions(
    parent_id: &str,
    mappings: &[CourtMapping],
    exclude_mapping_id: Option<&str>,
) -> BTreeSet<u32> {
    siblings(parent_id, mappings, exclude_mapping_id)
        .map(|m| m.position)
        .collect()
}

/// Свободные позиции родителя по возрастанию
pub fn available_positions(
    parent: &Court,
    mappings: &[CourtMapping],
    exclude_mapping_id: Option<&str>,
) -> Vec<u32> {
    let used = used_positions(&parent.id, mappings, exclude_mapping_id);
    slot_positions(parent)
        .into_iter()
        .filter(|p| !used.contains(p))
        .collect()
}

/// Корты, которые можно выбрать родителем
pub fn eligible_parents(courts: &[Court]) -> Vec<&Court> {
    let mut parents: Vec<&Court> = courts.iter().filter(|c| c.is_divisible()).collect();
    parents.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    parents
}

fn hierarchy_error(parent: &Court, child: &Court) -> Option<MappingError> {
    if parent.id == child.id {
        return Some(MappingError::SelfMapping);
    }
    if parent.venue_id != child.venue_id {
        return Some(MappingError::VenueMismatch);
    }
    if child.level >= parent.level {
        return Some(MappingError::LevelNotLower {
            parent: parent.level,
            child: child.level,
        });
    }
    if child.capacity > parent.capacity {
        return Some(MappingError::CapacityExceeded {
            parent: parent.capacity,
            child: child.capacity,
        });
    }
    None
}

/// Корты, допустимые как потомки `parent`, отсортированные по имени.
///
/// Уже привязанные к этому родителю исключаются, кроме потомка редактируемого маппинга.
pub fn eligible_children<'a>(
    parent: &Court,
    courts: &'a [Court],
    mappings: &[CourtMapping],
    exclude_mapping_id: Option<&str>,
) -> Vec<&'a Court> {
    let taken: BTreeSet<&str> = siblings(&parent.id, mappings, exclude_mapping_id)
        .map(|m| m.child_court_id.as_str())
        .collect();

    let mut children: Vec<&Court> = courts
        .iter()
        .filter(|c| hierarchy_error(parent, c).is_none())
        .filter(|c| !taken.contains(c.id.as_str()))
        .collect();
    children.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    children
}

/// Полная проверка формы маппинга перед отправкой
pub fn validate_mapping(
    dto: &CourtMappingDto,
    courts: &[Court],
    mappings: &[CourtMapping],
) -> Result<(), MappingError> {
    if dto.parent_court_id.trim().is_empty() {
        return Err(MappingError::ParentNotSelected);
    }
    if dto.child_court_id.trim().is_empty() {
        return Err(MappingError::ChildNotSelected);
    }

    let parent = courts
        .iter()
        .find(|c| c.id == dto.parent_court_id)
        .ok_or(MappingError::ParentNotFound)?;
    let child = courts
        .iter()
        .find(|c| c.id == dto.child_court_id)
        .ok_or(MappingError::ChildNotFound)?;

    if let Some(err) = hierarchy_error(parent, child) {
        return Err(err);
    }

    if parent.sub_court_count == 0 {
        return Err(MappingError::NoSlots);
    }
    if dto.position == 0 || dto.position > parent.sub_court_count {
        return Err(MappingError::PositionOutOfRange {
            position: dto.position,
            max: parent.sub_court_count,
        });
    }

    let exclude = dto.id.as_deref();
    if used_positions(&parent.id, mappings, exclude).contains(&dto.position) {
        return Err(MappingError::PositionTaken(dto.position));
    }
    if siblings(&parent.id, mappings, exclude).any(|m| m.child_court_id == child.id) {
        return Err(MappingError::DuplicateChild);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn court(id: &str, venue: &str, level: u32, capacity: u32, slots: u32) -> Court {
        Court {
            id: id.into(),
            venue_id: venue.into(),
            name: format!("Court {}", id),
            level,
            capacity,
            sub_court_count: slots,
            ..Default::default()
        }
    }

    fn mapping(id: &str, parent: &str, child: &str, position: u32) -> CourtMapping {
        CourtMapping {
            id: id.into(),
            parent_court_id: parent.into(),
            child_court_id: child.into(),
            position,
            ..Default::default()
        }
    }

    fn fixture() -> (Vec<Court>, Vec<CourtMapping>) {
        let courts = vec![
            court("big", "v1", 3, 16, 4),
            court("half", "v1", 2, 8, 2),
            court("s1", "v1", 1, 4, 0),
            court("s2", "v1", 1, 4, 0),
            court("s3", "v1", 1, 4, 0),
            court("other", "v2", 1, 4, 0),
            court("huge", "v1", 1, 32, 0),
        ];
        let mappings = vec![mapping("m1", "big", "s1", 1), mapping("m2", "big", "half", 3)];
        (courts, mappings)
    }

    #[test]
    fn test_slot_positions_follow_sub_court_count() {
        let (courts, _) = fixture();
        assert_eq!(slot_positions(&courts[0]), vec![1, 2, 3, 4]);
        assert!(slot_positions(&courts[2]).is_empty());
    }

    #[test]
    fn test_available_positions_skip_used() {
        let (courts, mappings) = fixture();
        assert_eq!(available_positions(&courts[0], &mappings, None), vec![2, 4]);
        // the edited mapping's own position stays selectable
        assert_eq!(available_positions(&courts[0], &mappings, Some("m2")), vec![2, 3, 4]);
        assert_eq!(available_positions(&courts[1], &mappings, None), vec![1, 2]);
    }

    #[test]
    fn test_eligible_parents_only_divisible() {
        let (courts, _) = fixture();
        let ids: Vec<_> = eligible_parents(&courts).iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["big", "half"]);
    }

    #[test]
    fn test_eligible_children_respect_hierarchy() {
        let (courts, mappings) = fixture();
        let ids: Vec<_> = eligible_children(&courts[0], &courts, &mappings, None)
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        // s1 and half already mapped, other is in another venue, huge is too large
        assert_eq!(ids, vec!["s2", "s3"]);

        let ids: Vec<_> = eligible_children(&courts[0], &courts, &mappings, Some("m1"))
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["s1", "s2", "s3"]);

        let ids: Vec<_> = eligible_children(&courts[1], &courts, &mappings, None)
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["s1", "s2", "s3"]);
    }

    #[test]
    fn test_validate_ok() {
        let (courts, mappings) = fixture();
        let dto = CourtMappingDto {
            id: None,
            parent_court_id: "big".into(),
            child_court_id: "s2".into(),
            position: 2,
        };
        assert_eq!(validate_mapping(&dto, &courts, &mappings), Ok(()));
    }

    #[test]
    fn test_validate_hierarchy_errors() {
        let (courts, mappings) = fixture();
        let mut dto = CourtMappingDto {
            id: None,
            parent_court_id: "half".into(),
            child_court_id: "big".into(),
            position: 1,
        };
        assert_eq!(
            validate_mapping(&dto, &courts, &mappings),
            Err(MappingError::LevelNotLower { parent: 2, child: 3 })
        );

        dto.parent_court_id = "big".into();
        dto.child_court_id = "big".into();
        assert_eq!(validate_mapping(&dto, &courts, &mappings), Err(MappingError::SelfMapping));

        dto.child_court_id = "other".into();
        assert_eq!(validate_mapping(&dto, &courts, &mappings), Err(MappingError::VenueMismatch));

        dto.child_court_id = "huge".into();
        assert_eq!(
            validate_mapping(&dto, &courts, &mappings),
            Err(MappingError::CapacityExceeded { parent: 16, child: 32 })
        );
    }

    #[test]
    fn test_validate_position_rules() {
        let (courts, mappings) = fixture();
        let mut dto = CourtMappingDto {
            id: None,
            parent_court_id: "big".into(),
            child_court_id: "s2".into(),
            position: 1,
        };
        assert_eq!(validate_mapping(&dto, &courts, &mappings), Err(MappingError::PositionTaken(1)));

        dto.position = 0;
        assert_eq!(
            validate_mapping(&dto, &courts, &mappings),
            Err(MappingError::PositionOutOfRange { position: 0, max: 4 })
        );

        dto.position = 5;
        assert!(matches!(
            validate_mapping(&dto, &courts, &mappings),
            Err(MappingError::PositionOutOfRange { .. })
        ));

        // editing m1 may keep position 1
        let edit = CourtMappingDto {
            id: Some("m1".into()),
            parent_court_id: "big".into(),
            child_court_id: "s1".into(),
            position: 1,
        };
        assert_eq!(validate_mapping(&edit, &courts, &mappings), Ok(()));
    }

    #[test]
    fn test_validate_duplicate_child_and_missing() {
        let (courts, mappings) = fixture();
        let dto = CourtMappingDto {
            id: None,
            parent_court_id: "big".into(),
            child_court_id: "s1".into(),
            position: 2,
        };
        assert_eq!(validate_mapping(&dto, &courts, &mappings), Err(MappingError::DuplicateChild));

        let missing = CourtMappingDto {
            id: None,
            parent_court_id: "nope".into(),
            child_court_id: "s1".into(),
            position: 1,
        };
        assert_eq!(validate_mapping(&missing, &courts, &mappings), Err(MappingError::ParentNotFound));

        let empty = CourtMappingDto::default();
        assert_eq!(validate_mapping(&empty, &courts, &mappings), Err(MappingError::ParentNotSelected));
    }

    #[test]
    fn test_error_messages_are_user_facing() {
        assert_eq!(MappingError::PositionTaken(3).to_string(), "Позиция 3 уже занята");
        assert_eq!(
            MappingError::PositionOutOfRange { position: 7, max: 4 }.to_string(),
            "Позиция 7 вне диапазона 1..4"
        );
    }
}
