use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{PersonRecord, Question};

/// The names sharing one position; source of one quiz question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionGroup {
    pub position: String,
    pub names: Vec<String>,
}

/// The static list of personnel records quiz content is derived from.
///
/// Order matters: grouping preserves first-seen order of positions and
/// within-group insertion order of names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    entries: Vec<PersonRecord>,
}

impl Roster {
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = PersonRecord>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[PersonRecord] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Group entries by position. Groups are non-empty by construction and
    /// every roster name lands in exactly one group.
    #[must_use]
    pub fn position_groups(&self) -> Vec<PositionGroup> {
        let mut groups: Vec<PositionGroup> = Vec::new();
        let mut index_by_position: HashMap<&str, usize> = HashMap::new();

        for person in &self.entries {
            match index_by_position.get(person.position()) {
                Some(&index) => groups[index].names.push(person.name().to_string()),
                None => {
                    index_by_position.insert(person.position(), groups.len());
                    groups.push(PositionGroup {
                        position: person.position().to_string(),
                        names: vec![person.name().to_string()],
                    });
                }
            }
        }

        groups
    }

    /// Derive one question per position group, in group order.
    ///
    /// An empty roster yields an empty list; the session layer guards that
    /// case at construction.
    #[must_use]
    pub fn questions(&self) -> Vec<Question> {
        self.position_groups()
            .into_iter()
            .map(|group| Question::new(&group.position, group.names))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn build_roster(pairs: &[(&str, &str)]) -> Roster {
        Roster::new(
            pairs
                .iter()
                .map(|&(name, position)| PersonRecord::new(name, position).unwrap())
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn groups_preserve_first_seen_order() {
        let roster = build_roster(&[
            ("Ann", "Alpha"),
            ("Ben", "Bravo"),
            ("Cal", "Alpha"),
            ("Dee", "Charlie"),
            ("Eli", "Bravo"),
        ]);

        let groups = roster.position_groups();
        let positions: Vec<&str> = groups.iter().map(|g| g.position.as_str()).collect();
        assert_eq!(positions, ["Alpha", "Bravo", "Charlie"]);
        assert_eq!(groups[0].names, ["Ann", "Cal"]);
        assert_eq!(groups[1].names, ["Ben", "Eli"]);
        assert_eq!(groups[2].names, ["Dee"]);
    }

    #[test]
    fn one_question_per_distinct_position_covering_all_names() {
        let roster = build_roster(&[
            ("Ann", "Alpha"),
            ("Ben", "Bravo"),
            ("Cal", "Alpha"),
            ("Dee", "Charlie"),
        ]);

        let questions = roster.questions();
        assert_eq!(questions.len(), 3);

        let all_answers: HashSet<&str> = questions
            .iter()
            .flat_map(|q| q.correct_answers())
            .map(String::as_str)
            .collect();
        let all_names: HashSet<&str> = roster.entries().iter().map(PersonRecord::name).collect();
        assert_eq!(all_answers, all_names);
    }

    #[test]
    fn single_holder_positions_grade_exact_names() {
        let roster = build_roster(&[
            ("Hailey Lee", "OPSO"),
            ("Ivan Lee", "DCO"),
        ]);

        let questions = roster.questions();
        assert_eq!(questions.len(), 2);
        assert!(questions.iter().all(|q| q.slot_count() == 1));

        let opso = &questions[0];
        assert_eq!(opso.prompt(), "Who holds the position of OPSO?");
        assert!(opso.is_correct(["Hailey Lee"]));
        assert!(!opso.is_correct(["Ivan"]));
    }

    #[test]
    fn empty_roster_yields_no_questions() {
        let roster = Roster::default();
        assert!(roster.is_empty());
        assert!(roster.questions().is_empty());
    }

    #[test]
    fn duplicate_name_across_positions_answers_both() {
        let roster = build_roster(&[("Sam", "Alpha"), ("Sam", "Bravo")]);
        let questions = roster.questions();
        assert_eq!(questions.len(), 2);
        assert!(questions[0].is_correct(["Sam"]));
        assert!(questions[1].is_correct(["Sam"]));
    }
}
