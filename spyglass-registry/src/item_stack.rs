//! Item stacks and their data components.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The item id representing the absence of an item.
pub const AIR: &str = "minecraft:air";

/// The stack size used when an item carries no `max_stack_size` component.
const DEFAULT_MAX_STACK_SIZE: i32 = 64;

/// A stack of items: an item id, a count, and any attached data components.
///
/// A stack with the air id or a non-positive count is empty. Mutating
/// operations normalize emptied stacks back to [`ItemStack::empty`] so an
/// empty stack never carries stale components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStack {
    id: String,
    count: i32,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    components: BTreeMap<String, serde_json::Value>,
}

impl Default for ItemStack {
    fn default() -> Self {
        Self::empty()
    }
}

impl ItemStack {
    /// Creates the empty stack.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            id: AIR.to_owned(),
            count: 0,
            components: BTreeMap::new(),
        }
    }

    /// Creates a stack of `count` items with the given id.
    #[must_use]
    pub fn new(id: impl Into<String>, count: i32) -> Self {
        let mut stack = Self {
            id: id.into(),
            count,
            components: BTreeMap::new(),
        };
        stack.normalize();
        stack
    }

    /// Attaches a data component, replacing any previous value for the key.
    #[must_use]
    pub fn with_component(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        if !self.is_empty() {
            self.components.insert(key.into(), value);
        }
        self
    }

    /// Returns the item id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the number of items in the stack.
    #[must_use]
    pub fn count(&self) -> i32 {
        self.count
    }

    /// Returns the component value for the given key, if present.
    #[must_use]
    pub fn component(&self, key: &str) -> Option<&serde_json::Value> {
        self.components.get(key)
    }

    /// Returns true if this stack holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count <= 0 || self.id == AIR
    }

    /// Returns the maximum stack size for this item.
    #[must_use]
    pub fn max_stack_size(&self) -> i32 {
        self.components
            .get("max_stack_size")
            .and_then(serde_json::Value::as_i64)
            .and_then(|size| i32::try_from(size).ok())
            .unwrap_or(DEFAULT_MAX_STACK_SIZE)
    }

    /// Returns whether this item can stack beyond a single unit.
    #[must_use]
    pub fn is_stackable(&self) -> bool {
        self.max_stack_size() > 1
    }

    /// Returns a copy of this stack with a different count.
    #[must_use]
    pub fn copy_with_count(&self, count: i32) -> Self {
        if self.is_empty() || count <= 0 {
            return Self::empty();
        }
        let mut copy = self.clone();
        copy.count = count;
        copy
    }

    /// Takes up to `count` items out of this stack, leaving the remainder.
    pub fn split(&mut self, count: i32) -> Self {
        let taken = count.min(self.count);
        if self.is_empty() || taken <= 0 {
            return Self::empty();
        }
        let result = self.copy_with_count(taken);
        self.shrink(taken);
        result
    }

    /// Takes the entire stack, leaving this one empty.
    pub fn copy_and_clear(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Increases the count by `amount`.
    pub fn grow(&mut self, amount: i32) {
        self.count += amount;
    }

    /// Decreases the count by `amount`, emptying the stack at zero.
    pub fn shrink(&mut self, amount: i32) {
        self.count -= amount;
        self.normalize();
    }

    /// Returns whether two stacks hold the same item with identical
    /// components, ignoring count.
    #[must_use]
    pub fn is_same_item_same_components(a: &Self, b: &Self) -> bool {
        a.id == b.id && a.components == b.components
    }

    fn normalize(&mut self) {
        if self.is_empty() {
            *self = Self::empty();
        }
    }
}
