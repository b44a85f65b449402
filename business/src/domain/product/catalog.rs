use super::model::Product;
use super::value_objects::CategorySelection;

/// The fetched product collection plus the active category selection.
///
/// The visible list is a pure derivation over both; it is recomputed on every
/// read and never mutated in place. A generation counter guards against a slow
/// fetch resolving after a newer one has already replaced the collection.
#[derive(Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
    selection: CategorySelection,
    generation: u64,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> CategorySelection {
        self.selection
    }

    /// Activates a selection and returns the generation the next fetch must
    /// present when applying its result.
    pub fn select(&mut self, selection: CategorySelection) -> u64 {
        self.selection = selection;
        self.generation += 1;
        self.generation
    }

    /// Replaces the collection if `generation` is still current. A stale
    /// result (an older fetch resolving late) is discarded.
    pub fn apply(&mut self, generation: u64, products: Vec<Product>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.products = products;
        true
    }

    /// Products visible under the active selection, in fetch order.
    pub fn visible(&self) -> Vec<Product> {
        self.products
            .iter()
            .filter(|product| self.selection.matches(product.category))
            .cloned()
            .collect()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}
