use uuid::Uuid;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BudgetCategory {
    id: Uuid,
    name: String,
    description: Option<String>,
    display_order: i32,
}

impl BudgetCategory {
    pub fn new(id: Uuid, name: String, description: Option<String>, display_order: i32) -> Self {
        Self {
            id,
            name,
            description,
            display_order,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn display_order(&self) -> i32 {
        self.display_order
    }
}
