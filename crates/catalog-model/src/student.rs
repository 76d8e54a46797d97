use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Specialization of an enrolled student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StudentKind {
    Undergraduate { major: String },
    Graduate { research_topic: String },
}

/// A rostered student, addressed by student id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub age: u32,
    pub student_id: String,
    pub gpa: f64,
    pub kind: StudentKind,
}

impl Student {
    pub fn undergraduate(
        name: impl Into<String>,
        age: u32,
        student_id: impl Into<String>,
        gpa: f64,
        major: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            student_id: student_id.into(),
            gpa,
            kind: StudentKind::Undergraduate {
                major: major.into(),
            },
        }
    }

    pub fn graduate(
        name: impl Into<String>,
        age: u32,
        student_id: impl Into<String>,
        gpa: f64,
        research_topic: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            student_id: student_id.into(),
            gpa,
            kind: StudentKind::Graduate {
                research_topic: research_topic.into(),
            },
        }
    }

    fn detail_line(&self) -> String {
        format!(
            "Name: {}, Age: {}, Student ID: {}, GPA: {}",
            self.name, self.age, self.student_id, self.gpa
        )
    }
}

impl Record for Student {
    const COLUMNS: [&'static str; 4] = ["Student ID", "Name", "Age", "GPA"];

    fn key(&self) -> &str {
        &self.student_id
    }

    fn primary_text(&self) -> &str {
        &self.name
    }

    fn numeric(&self) -> f64 {
        self.gpa
    }

    fn column_value(&self, column: usize) -> String {
        match column {
            0 => self.student_id.clone(),
            1 => self.name.clone(),
            2 => self.age.to_string(),
            3 => self.gpa.to_string(),
            _ => String::new(),
        }
    }

    fn display_lines(&self) -> [String; 2] {
        let detail = self.detail_line();
        let full = match &self.kind {
            StudentKind::Undergraduate { major } => format!("{detail}, Major: {major}"),
            StudentKind::Graduate { research_topic } => {
                format!("{detail}, Research Topic: {research_topic}")
            }
        };
        [detail, full]
    }
}
