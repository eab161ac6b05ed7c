//! Per-field filter value objects.
//!
//! A filter holds every condition requested for one field of a criteria
//! record. All members are optional; a filter with nothing set imposes no
//! constraint and is ignored by the compiler. When several members are set
//! they must all hold (conjunction within the filter).
//!
//! The operator set is enforced at the type level: every field type gets
//! [`Filter`], ordered types (numbers, dates) get [`RangeFilter`], and text
//! fields get [`StringFilter`]. Invalid combinations such as `contains` on
//! a date are unrepresentable.

use chrono::NaiveDate;
use pessoa_core::Id;
use serde::{Deserialize, Serialize};

/// Generic condition holder for a single scalar field of type `T`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Filter<T> {
    pub equals: Option<T>,
    pub not_equals: Option<T>,
    /// `Some(true)`: field must be non-null; `Some(false)`: field must be null
    pub specified: Option<bool>,
    #[serde(rename = "in")]
    pub in_: Option<Vec<T>>,
    pub not_in: Option<Vec<T>>,
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Self {
            equals: None,
            not_equals: None,
            specified: None,
            in_: None,
            not_in: None,
        }
    }
}

impl<T> Filter<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn equals(value: T) -> Self {
        Self {
            equals: Some(value),
            ..Self::default()
        }
    }

    pub fn not_equals(value: T) -> Self {
        Self {
            not_equals: Some(value),
            ..Self::default()
        }
    }

    pub fn specified(specified: bool) -> Self {
        Self {
            specified: Some(specified),
            ..Self::default()
        }
    }

    pub fn in_list(values: Vec<T>) -> Self {
        Self {
            in_: Some(values),
            ..Self::default()
        }
    }

    pub fn not_in_list(values: Vec<T>) -> Self {
        Self {
            not_in: Some(values),
            ..Self::default()
        }
    }

    /// Chain a `specified` condition onto an existing filter.
    pub fn and_specified(mut self, specified: bool) -> Self {
        self.specified = Some(specified);
        self
    }

    /// True when no condition is set; such a filter constrains nothing.
    pub fn is_empty(&self) -> bool {
        self.equals.is_none()
            && self.not_equals.is_none()
            && self.specified.is_none()
            && self.in_.is_none()
            && self.not_in.is_none()
    }
}

impl<T: Clone> Filter<T> {
    /// Deep copy, independent of the original. Criteria are copied per
    /// request so the list and count legs never share a mutable instance.
    pub fn copy(&self) -> Self {
        self.clone()
    }
}

/// Condition holder for an ordered field: everything [`Filter`] offers plus
/// inclusive/exclusive bound comparisons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct RangeFilter<T> {
    #[serde(flatten)]
    pub base: Filter<T>,
    pub greater_than: Option<T>,
    pub greater_than_or_equal: Option<T>,
    pub less_than: Option<T>,
    pub less_than_or_equal: Option<T>,
}

impl<T> Default for RangeFilter<T> {
    fn default() -> Self {
        Self {
            base: Filter::default(),
            greater_than: None,
            greater_than_or_equal: None,
            less_than: None,
            less_than_or_equal: None,
        }
    }
}

impl<T> RangeFilter<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn equals(value: T) -> Self {
        Self {
            base: Filter::equals(value),
            ..Self::default()
        }
    }

    pub fn not_equals(value: T) -> Self {
        Self {
            base: Filter::not_equals(value),
            ..Self::default()
        }
    }

    pub fn specified(specified: bool) -> Self {
        Self {
            base: Filter::specified(specified),
            ..Self::default()
        }
    }

    pub fn in_list(values: Vec<T>) -> Self {
        Self {
            base: Filter::in_list(values),
            ..Self::default()
        }
    }

    pub fn not_in_list(values: Vec<T>) -> Self {
        Self {
            base: Filter::not_in_list(values),
            ..Self::default()
        }
    }

    pub fn greater_than(value: T) -> Self {
        Self {
            greater_than: Some(value),
            ..Self::default()
        }
    }

    pub fn greater_than_or_equal(value: T) -> Self {
        Self {
            greater_than_or_equal: Some(value),
            ..Self::default()
        }
    }

    pub fn less_than(value: T) -> Self {
        Self {
            less_than: Some(value),
            ..Self::default()
        }
    }

    pub fn less_than_or_equal(value: T) -> Self {
        Self {
            less_than_or_equal: Some(value),
            ..Self::default()
        }
    }

    /// Chain a lower bound onto an existing filter (e.g. a between query).
    pub fn and_greater_than_or_equal(mut self, value: T) -> Self {
        self.greater_than_or_equal = Some(value);
        self
    }

    /// Chain an upper bound onto an existing filter.
    pub fn and_less_than(mut self, value: T) -> Self {
        self.less_than = Some(value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
            && self.greater_than.is_none()
            && self.greater_than_or_equal.is_none()
            && self.less_than.is_none()
            && self.less_than_or_equal.is_none()
    }
}

impl<T: Clone> RangeFilter<T> {
    pub fn copy(&self) -> Self {
        self.clone()
    }
}

/// Condition holder for a text field: everything [`Filter`] offers plus
/// substring matching. Matching is case-insensitive (the storage layer's
/// `ILIKE` behavior).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StringFilter {
    #[serde(flatten)]
    pub base: Filter<String>,
    pub contains: Option<String>,
    pub does_not_contain: Option<String>,
}

impl StringFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn equals(value: impl Into<String>) -> Self {
        Self {
            base: Filter::equals(value.into()),
            ..Self::default()
        }
    }

    pub fn not_equals(value: impl Into<String>) -> Self {
        Self {
            base: Filter::not_equals(value.into()),
            ..Self::default()
        }
    }

    pub fn specified(specified: bool) -> Self {
        Self {
            base: Filter::specified(specified),
            ..Self::default()
        }
    }

    pub fn in_list(values: Vec<String>) -> Self {
        Self {
            base: Filter::in_list(values),
            ..Self::default()
        }
    }

    pub fn not_in_list(values: Vec<String>) -> Self {
        Self {
            base: Filter::not_in_list(values),
            ..Self::default()
        }
    }

    pub fn contains(value: impl Into<String>) -> Self {
        Self {
            contains: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn does_not_contain(value: impl Into<String>) -> Self {
        Self {
            does_not_contain: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.contains.is_none() && self.does_not_contain.is_none()
    }

    pub fn copy(&self) -> Self {
        self.clone()
    }
}

/// Filter over `i64` identifier and numeric columns.
pub type LongFilter = RangeFilter<Id>;

/// Filter over date columns.
pub type LocalDateFilter = RangeFilter<NaiveDate>;

/// Filter over boolean columns.
pub type BooleanFilter = Filter<bool>;
