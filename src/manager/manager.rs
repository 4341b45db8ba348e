use std::cell::{
    RefCell, RefMut
};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;

use super::managererror::ManagerError;
use super::namedobject::NamedJsonObject;

/// Name-keyed registry of configuration objects read from JSON.
///
/// Entries iterate in name order so anything built from a registry is
/// deterministic.
pub trait IManager<V> where
    V: Clone {
    fn map(&self) -> RefMut<'_, BTreeMap<String, V>>;

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError>;

    fn insert(&self, name: &str, value: V) {
        self.map().insert(name.to_owned(), value);
    }

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        let map = self.map();
        map.get(name)
            .cloned()
            .ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    fn contains(&self, name: &str) -> bool {
        self.map().contains_key(name)
    }

    fn names(&self) -> Vec<String> {
        self.map().keys().cloned().collect()
    }

    fn entries(&self) -> Vec<(String, V)> {
        self.map()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    fn is_empty(&self) -> bool {
        self.map().is_empty()
    }

    fn insert_obj_from_json_vec(&self, json_vec: &[serde_json::Value]) -> Result<(), ManagerError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(j.clone())?;
        }
        Ok(())
    }

    fn from_reader(&self, file_path: &str) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        if json_value.is_array() {
            let json_array: Vec<serde_json::Value> = ManagerError::from_json_or_json_parse_error(json_value)?;
            self.insert_obj_from_json_vec(&json_array)?;
        } else {
            self.insert_obj_from_json(json_value)?;
        }
        Ok(())
    }
}


pub struct Manager<V> {
    map_cell: RefCell<BTreeMap<String, V>>,
    get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>
}


impl <V> Manager<V> where
    V: Clone {
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>) -> Manager<V> {
        Manager {map_cell: RefCell::new(BTreeMap::new()), get_obj_from_json}
    }
}

impl <V> IManager<V> for Manager<V> where
    V: Clone {
    fn map(&self) -> RefMut<'_, BTreeMap<String, V>> {
        self.map_cell.borrow_mut()
    }

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let named_object: NamedJsonObject = ManagerError::from_json_or_json_parse_error(json_value.clone())?;
        let v = (self.get_obj_from_json)(json_value)?;
        self.map().insert(named_object.name().to_owned(), v);
        Ok(())
    }
}
