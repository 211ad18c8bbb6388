use uuid::Uuid;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Venue {
    id: Uuid,
    name: String,
    capacity: Option<i32>,
    is_active: bool,
}

impl Venue {
    pub fn new(id: Uuid, name: String, capacity: Option<i32>, is_active: bool) -> Self {
        Self {
            id,
            name,
            capacity,
            is_active,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> Option<i32> {
        self.capacity
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn can_host(&self, expected_participants: Option<i32>) -> bool {
        match (self.capacity, expected_participants) {
            (Some(capacity), Some(expected)) => capacity >= expected,
            _ => true,
        }
    }
}
