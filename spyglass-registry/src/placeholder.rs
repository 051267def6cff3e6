//! Display-only item stacks for decorative slots.

use crate::ItemStack;

/// The stack rendered in the decorative slot next to the crafting grid,
/// hinting at where the crafting result appears.
#[must_use]
pub fn crafting_output() -> ItemStack {
    ItemStack::new("minecraft:crafting_table", 1)
        .with_component("custom_name", serde_json::json!("Crafting"))
        .with_component("max_stack_size", serde_json::json!(1))
}

#[cfg(test)]
mod test {
    use super::crafting_output;

    #[test]
    fn crafting_output_is_displayable() {
        let stack = crafting_output();
        assert!(!stack.is_empty());
        assert_eq!(stack.id(), "minecraft:crafting_table");
    }
}
