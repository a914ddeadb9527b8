//! The domain of the fruit salad walkthrough: a [`Fruit`] is an item that can be cubed once,
//! and a [`FruitSalad`] is made by cubing every fruit it is given.
//!
//! The tests of this crate show the arrange/act/assert phases with `arrange` fixtures: a
//! `fruit_bowl` fixture arranges the fruit, building the salad is the act, and the test
//! asserts that every piece ended up cubed.

/// A single piece of fruit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fruit {
    name: String,
    cubed: bool,
}

impl Fruit {
    /// A whole fruit: not cubed yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cubed: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_cubed(&self) -> bool {
        self.cubed
    }

    /// Cut the fruit into cubes. Cubing twice leaves it cubed.
    pub fn cube(&mut self) {
        self.cubed = true;
    }
}

/// A salad owns its fruit, and all of it is cubed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FruitSalad {
    fruit: Vec<Fruit>,
}

impl FruitSalad {
    /// Make a salad out of `fruit`.
    ///
    /// This is not a pure constructor: every given fruit is cubed in place before the salad
    /// takes it, so the items handed over come out transformed.
    pub fn new(mut fruit: Vec<Fruit>) -> Self {
        fruit.iter_mut().for_each(Fruit::cube);
        Self { fruit }
    }

    pub fn fruit(&self) -> &[Fruit] {
        &self.fruit
    }

    /// True when every piece is cubed. An empty salad is prepared.
    pub fn is_prepared(&self) -> bool {
        self.fruit.iter().all(Fruit::is_cubed)
    }

    pub fn len(&self) -> usize {
        self.fruit.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fruit.is_empty()
    }

    pub fn into_fruit(self) -> Vec<Fruit> {
        self.fruit
    }
}
