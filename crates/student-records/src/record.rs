//! The student record value type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One student's stored attributes.
///
/// The id is fixed at construction; the remaining fields are rewritten in
/// place by [`crate::RecordStore::update`]. No field is validated, so empty
/// strings and negative ages are stored as given.
///
/// # Example
///
/// ```
/// use student_records::Record;
///
/// let record = Record::new("S1", "Ana", 20, "CS");
/// assert_eq!(record.to_string(), "ID: S1, Name: Ana, Age: 20, Course: CS");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    id: String,
    name: String,
    age: i32,
    course: String,
}

impl Record {
    /// Creates a record from its four fields.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        age: i32,
        course: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            course: course.into(),
        }
    }

    /// Returns the caller-supplied identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the student's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the student's age.
    #[must_use]
    pub const fn age(&self) -> i32 {
        self.age
    }

    /// Returns the course the student is enrolled on.
    #[must_use]
    pub fn course(&self) -> &str {
        &self.course
    }

    pub(crate) fn overwrite(&mut self, name: String, age: i32, course: String) {
        self.name = name;
        self.age = age;
        self.course = course;
    }

    pub(crate) fn name_contains_ignore_case(&self, lowered_query: &str) -> bool {
        self.name.to_lowercase().contains(lowered_query)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Age: {}, Course: {}",
            self.id, self.name, self.age, self.course
        )
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn getters_return_constructor_values() {
        let record = Record::new("S7", "Zoë Ångström", 31, "Physics");

        assert_eq!(record.id(), "S7");
        assert_eq!(record.name(), "Zoë Ångström");
        assert_eq!(record.age(), 31);
        assert_eq!(record.course(), "Physics");
    }

    #[rstest]
    #[case::typical(Record::new("S1", "Ana", 20, "CS"), "ID: S1, Name: Ana, Age: 20, Course: CS")]
    #[case::negative_age(Record::new("X", "", -4, ""), "ID: X, Name: , Age: -4, Course: ")]
    #[case::spaces_kept(
        Record::new(" S2 ", "Ben  T.", 0, "E E"),
        "ID:  S2 , Name: Ben  T., Age: 0, Course: E E"
    )]
    fn display_renders_all_fields(#[case] record: Record, #[case] expected: &str) {
        assert_eq!(record.to_string(), expected);
    }

    #[test]
    fn overwrite_keeps_id() {
        let mut record = Record::new("S2", "Ben", 22, "EE");

        record.overwrite("Ben T.".to_owned(), 23, "ME".to_owned());

        assert_eq!(record, Record::new("S2", "Ben T.", 23, "ME"));
    }

    #[rstest]
    #[case("alicia li", true)]
    #[case("li", true)]
    #[case("ali", true)]
    #[case("bob", false)]
    fn name_match_uses_lowered_query(#[case] query: &str, #[case] expected: bool) {
        let record = Record::new("S1", "Alicia Li", 20, "CS");

        assert_eq!(record.name_contains_ignore_case(query), expected);
    }
}
