//! Interaction matrix for filtering collider pairs
//!
//! Before any geometry runs, the pair's types are looked up in a symmetric
//! table. Pairs the table ignores are skipped outright.

use serde::{Deserialize, Serialize};

use super::collider::ColliderType;

/// What a pair of collider types does when their shapes overlap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Interaction {
    /// Never tested
    #[default]
    Ignore,
    /// Tested; overlaps notify both sides
    Notify,
    /// Tested; overlaps notify both sides and push the blocking side out
    Resolve,
}

impl Interaction {
    /// Whether the pair reaches the narrow phase at all
    pub const fn is_tested(self) -> bool {
        !matches!(self, Self::Ignore)
    }
}

/// One table entry in serialized form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRule {
    /// First type
    pub a: ColliderType,
    /// Second type
    pub b: ColliderType,
    /// Outcome for both orders of the pair
    pub interaction: Interaction,
}

/// Symmetric `(type, type) -> Interaction` table
///
/// Serialized as the list of non-ignored rules; missing pairs are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<InteractionRule>", into = "Vec<InteractionRule>")]
pub struct InteractionMatrix {
    table: [[Interaction; 4]; 4],
}

impl InteractionMatrix {
    /// Table where every pair is ignored
    pub const fn empty() -> Self {
        Self {
            table: [[Interaction::Ignore; 4]; 4],
        }
    }

    /// Set the outcome for both `(a, b)` and `(b, a)`
    pub fn set(&mut self, a: ColliderType, b: ColliderType, interaction: Interaction) -> &mut Self {
        self.table[a.index()][b.index()] = interaction;
        self.table[b.index()][a.index()] = interaction;
        self
    }

    /// Builder pattern: set a rule
    pub fn with(mut self, a: ColliderType, b: ColliderType, interaction: Interaction) -> Self {
        self.set(a, b, interaction);
        self
    }

    /// Outcome for a pair
    pub const fn interaction(&self, a: ColliderType, b: ColliderType) -> Interaction {
        self.table[a.index()][b.index()]
    }

    /// Whether a pair reaches the narrow phase
    pub const fn allows(&self, a: ColliderType, b: ColliderType) -> bool {
        self.interaction(a, b).is_tested()
    }

    /// Non-ignored rules, one per unordered pair
    pub fn rules(&self) -> Vec<InteractionRule> {
        let mut rules = Vec::new();
        for (i, &a) in ColliderType::ALL.iter().enumerate() {
            for &b in &ColliderType::ALL[i..] {
                let interaction = self.interaction(a, b);
                if interaction.is_tested() {
                    rules.push(InteractionRule { a, b, interaction });
                }
            }
        }
        rules
    }
}

impl Default for InteractionMatrix {
    /// Gameplay defaults:
    ///
    /// | A            | B               | Outcome   |
    /// |--------------|-----------------|-----------|
    /// | AttackSource | AttackTarget    | `Notify`  |
    /// | Blocking     | Blocking        | `Resolve` |
    /// | Blocking     | NonBlockingZone | `Notify`  |
    /// | anything else                 || `Ignore`  |
    fn default() -> Self {
        Self::empty()
            .with(ColliderType::AttackSource, ColliderType::AttackTarget, Interaction::Notify)
            .with(ColliderType::Blocking, ColliderType::Blocking, Interaction::Resolve)
            .with(ColliderType::Blocking, ColliderType::NonBlockingZone, Interaction::Notify)
    }
}

impl From<Vec<InteractionRule>> for InteractionMatrix {
    fn from(rules: Vec<InteractionRule>) -> Self {
        let mut matrix = Self::empty();
        for rule in rules {
            matrix.set(rule.a, rule.b, rule.interaction);
        }
        matrix
    }
}

impl From<InteractionMatrix> for Vec<InteractionRule> {
    fn from(matrix: InteractionMatrix) -> Self {
        matrix.rules()
    }
}
