//! In-memory stand-in for the inventory service, used by tests.

use std::cell::RefCell;

use async_trait::async_trait;

use super::ItemRepository;
use crate::error::{ClientError, ClientResult};
use crate::models::{Item, ItemPatch, NewItem, QuantityInput};

/// Which endpoint was hit, in call order
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Get(String),
    Create(NewItem),
    Update(String, ItemPatch),
    Remove(String),
    Export,
}

#[derive(Default)]
struct State {
    items: Vec<Item>,
    next_id: u32,
    calls: Vec<Call>,
    offline: bool,
}

/// Mirrors the service contract: absent patch keys are no-ops, a missing
/// name is rejected with a message, ids are assigned sequentially.
#[derive(Default)]
pub struct MemoryRepository {
    state: RefCell<State>,
}

pub fn item(id: &str, name: &str, description: &str, quantity: i64) -> Item {
    Item {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        quantity,
    }
}

fn quantity_value(input: &QuantityInput) -> ClientResult<i64> {
    match input {
        QuantityInput::Number(n) if *n >= 0 => Ok(*n),
        QuantityInput::Number(_) => Err(ClientError::service(400, "Quantity cannot be negative")),
        QuantityInput::Raw(raw) => Err(ClientError::service(
            400,
            format!("Quantity must be a number, got \"{}\"", raw),
        )),
    }
}

impl MemoryRepository {
    pub fn with_items(items: Vec<Item>) -> Self {
        let repo = Self::default();
        {
            let mut state = repo.state.borrow_mut();
            state.next_id = items.len() as u32 + 1;
            state.items = items;
        }
        repo
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    pub fn items(&self) -> Vec<Item> {
        self.state.borrow().items.clone()
    }

    /// Every subsequent call fails with a network error
    pub fn go_offline(&self) {
        self.state.borrow_mut().offline = true;
    }

    fn record(&self, call: Call) -> ClientResult<()> {
        let mut state = self.state.borrow_mut();
        state.calls.push(call);
        if state.offline {
            return Err(ClientError::Network("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl ItemRepository for MemoryRepository {
    async fn list(&self) -> ClientResult<Vec<Item>> {
        self.record(Call::List)?;
        Ok(self.items())
    }

    async fn get(&self, id: &str) -> ClientResult<Item> {
        self.record(Call::Get(id.to_string()))?;
        self.state
            .borrow()
            .items
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or_else(|| ClientError::not_found(id))
    }

    async fn create(&self, fields: &NewItem) -> ClientResult<Item> {
        self.record(Call::Create(fields.clone()))?;
        let name = match fields.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => return Err(ClientError::service(400, "Item must have a name")),
        };
        let quantity = match &fields.quantity {
            Some(q) => quantity_value(q)?,
            None => 0,
        };
        let mut state = self.state.borrow_mut();
        let id = state.next_id.max(1);
        state.next_id = id + 1;
        let created = Item {
            id: id.to_string(),
            name,
            description: fields.description.clone().unwrap_or_default(),
            quantity,
        };
        state.items.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &str, patch: &ItemPatch) -> ClientResult<Item> {
        self.record(Call::Update(id.to_string(), patch.clone()))?;
        let quantity = patch.quantity.as_ref().map(quantity_value).transpose()?;
        let mut state = self.state.borrow_mut();
        let item = state
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| ClientError::service(404, format!("No item with id {}", id)))?;
        if let Some(name) = &patch.name {
            item.name = name.clone();
        }
        if let Some(description) = &patch.description {
            item.description = description.clone();
        }
        if let Some(quantity) = quantity {
            item.quantity = quantity;
        }
        Ok(item.clone())
    }

    async fn remove(&self, id: &str) -> ClientResult<()> {
        self.record(Call::Remove(id.to_string()))?;
        self.state.borrow_mut().items.retain(|i| i.id != id);
        Ok(())
    }

    async fn export_csv(&self) -> ClientResult<String> {
        self.record(Call::Export)?;
        let mut csv = String::from("id,name,description,quantity\n");
        for item in self.state.borrow().items.iter() {
            csv.push_str(&format!(
                "{},{},{},{}\n",
                item.id, item.name, item.description, item.quantity
            ));
        }
        Ok(csv)
    }
}
