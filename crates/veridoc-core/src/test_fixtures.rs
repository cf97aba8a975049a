//! Shared fixtures for engine tests: a plain entity, an edge entity,
//! and store doubles for the persistence boundary.

use crate::{
    link::EdgeValue,
    reference::Reference,
    report::Report,
    rule::{RuleKind, RuleSet},
    store::EntityStore,
    traits::{FieldValues, Path, ValidateAuto, ValidateCustom},
    value::Value,
};
use std::{cell::Cell, sync::LazyLock};
use thiserror::Error as ThisError;

///
/// User
///

#[derive(Debug)]
pub(crate) struct User {
    pub username: String,
    pub age: i64,
    pub bio: Option<String>,
}

impl Path for User {
    const PATH: &'static str = "accounts/user";
}

impl FieldValues for User {
    fn get_value(&self, field: &str) -> Option<Value> {
        match field {
            "username" => Some(self.username.clone().into()),
            "age" => Some(self.age.into()),
            "bio" => Some(self.bio.clone().into()),
            _ => None,
        }
    }
}

impl ValidateAuto for User {
    fn rule_set() -> Option<&'static RuleSet<Self>> {
        static RULES: LazyLock<RuleSet<User>> = LazyLock::new(|| {
            RuleSet::builder()
                .text_field("username")
                .numeric_field("age")
                .text_field("bio")
                .rule("username", RuleKind::min_length(5))
                .rule("username", RuleKind::max_length(30))
                .rule("username", RuleKind::pattern("[A-Za-z0-9_]+"))
                .rule("age", RuleKind::greater_or_equal(18))
                .global(|user: &User, report: &mut Report| {
                    if user.bio.as_deref() == Some("") {
                        report.issue_at("bio", "must not be blank when set");
                    }
                })
                .build()
                .expect("user rule set")
        });

        Some(&RULES)
    }
}

impl ValidateCustom for User {}

///
/// Authored
/// Directed edge: user authored post.
///

#[derive(Debug)]
pub(crate) struct Authored {
    pub from: String,
    pub to: String,
    pub note: Option<String>,
}

impl Authored {
    pub fn new(from: &Reference, to: &Reference, note: Option<String>) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            note,
        }
    }
}

impl Path for Authored {
    const PATH: &'static str = "graph/authored";
}

impl FieldValues for Authored {
    fn get_value(&self, field: &str) -> Option<Value> {
        match field {
            "_from" => Some(self.from.clone().into()),
            "_to" => Some(self.to.clone().into()),
            "note" => Some(self.note.clone().into()),
            _ => None,
        }
    }
}

impl ValidateAuto for Authored {
    fn rule_set() -> Option<&'static RuleSet<Self>> {
        static RULES: LazyLock<RuleSet<Authored>> = LazyLock::new(|| {
            RuleSet::builder()
                .reference_field("_from")
                .reference_field("_to")
                .text_field("note")
                .rule("note", RuleKind::max_length(256))
                .build()
                .expect("authored rule set")
        });

        Some(&RULES)
    }
}

impl ValidateCustom for Authored {}

impl EdgeValue for Authored {
    fn source(&self) -> &str {
        &self.from
    }

    fn target(&self) -> &str {
        &self.to
    }
}

///
/// RecordingStore
/// Counts insert calls so tests can assert zero persistence on failure.
///

#[derive(Default)]
pub(crate) struct RecordingStore {
    inserts: Cell<usize>,
}

impl RecordingStore {
    pub fn inserts(&self) -> usize {
        self.inserts.get()
    }
}

impl EntityStore<Authored> for RecordingStore {
    type Error = StoreRejected;

    fn insert(&self, edge: Authored) -> Result<Authored, Self::Error> {
        self.inserts.set(self.inserts.get() + 1);
        Ok(edge)
    }
}

///
/// UserStore
///

#[derive(Default)]
pub(crate) struct UserStore {
    inserts: Cell<usize>,
}

impl UserStore {
    pub fn inserts(&self) -> usize {
        self.inserts.get()
    }
}

impl EntityStore<User> for UserStore {
    type Error = StoreRejected;

    fn insert(&self, user: User) -> Result<User, Self::Error> {
        self.inserts.set(self.inserts.get() + 1);
        Ok(user)
    }
}

///
/// FailingStore
///

pub(crate) struct FailingStore;

impl EntityStore<Authored> for FailingStore {
    type Error = StoreRejected;

    fn insert(&self, _edge: Authored) -> Result<Authored, Self::Error> {
        Err(StoreRejected)
    }
}

///
/// StoreRejected
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[error("store rejected the write")]
pub(crate) struct StoreRejected;
