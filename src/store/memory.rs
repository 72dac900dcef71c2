use super::*;
use std::collections::HashSet;

/// The authoritative in-memory contact list, kept in insertion order.
#[derive(Debug, Default)]
pub struct ContactStore {
    data: Vec<Contact>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Takes ownership of the seed records. Fails if two share an id.
    pub fn from_seed(contacts: Vec<Contact>) -> Result<Self, AppError> {
        {
            let mut seen: HashSet<&str> = HashSet::with_capacity(contacts.len());

            for contact in &contacts {
                if !seen.insert(contact.id.as_str()) {
                    return Err(AppError::Validation(format!(
                        "Duplicate contact id in seed data: {}",
                        contact.id
                    )));
                }
            }
        }

        Ok(Self { data: contacts })
    }

    pub fn list(&self) -> &[Contact] {
        &self.data
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Contact> {
        self.data.iter().find(|c| c.id == id)
    }

    pub fn add(&mut self, fields: NewContact) -> Contact {
        let mut contact = Contact::with_generated_id(fields);

        // A fresh v4 id can only clash with a seeded one by accident
        while self.get_by_id(&contact.id).is_some() {
            contact = Contact::with_generated_id(NewContact {
                name: contact.name,
                email: contact.email,
                phone: contact.phone,
            });
        }

        self.data.push(contact.clone());
        contact
    }

    pub fn remove(&mut self, id: &str) -> Option<Contact> {
        let index = self.position(id)?;
        Some(self.data.remove(index))
    }

    pub fn update(&mut self, id: &str, fields: ContactPatch) -> Option<Contact> {
        let index = self.position(id)?;
        let updated = self.data[index].merged(fields);

        self.data[index] = updated.clone();
        Some(updated)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> ContactStoreIter<'_> {
        ContactStoreIter {
            inner: &self.data,
            idx: 0,
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.data.iter().position(|c| c.id == id)
    }
}

pub struct ContactStoreIter<'a> {
    inner: &'a [Contact],
    idx: usize,
}

impl<'a> Iterator for ContactStoreIter<'a> {
    type Item = &'a Contact;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= self.inner.len() {
            return None;
        }
        let contact = &self.inner[self.idx];
        self.idx += 1;
        Some(contact)
    }
}

impl<'a> IntoIterator for &'a ContactStore {
    type Item = &'a Contact;
    type IntoIter = ContactStoreIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
