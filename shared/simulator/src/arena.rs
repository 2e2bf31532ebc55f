//! Generational arena backing the entity collections. Handles stay cheap to
//! copy and a freed slot's handle can never alias a later insertion.

#[derive(Hash, PartialEq, Eq, Copy, Clone, Debug, PartialOrd, Ord)]
pub struct Index {
    slot: u32,
    generation: u32,
}

impl Index {
    pub fn into_raw_parts(self) -> (u32, u32) {
        (self.generation, self.slot)
    }

    pub fn from_raw_parts(generation: u32, slot: u32) -> Index {
        Index { slot, generation }
    }
}

enum Slot<T> {
    Occupied { generation: u32, value: T },
    Free { generation: u32 },
}

pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    len: usize,
}

impl<T> Arena<T> {
    pub fn new() -> Arena<T> {
        Arena {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn insert(&mut self, value: T) -> Index {
        self.len += 1;
        match self.free.pop() {
            Some(slot) => {
                let generation = match self.slots[slot as usize] {
                    Slot::Free { generation } => generation,
                    Slot::Occupied { .. } => unreachable!("free list points at occupied slot"),
                };
                self.slots[slot as usize] = Slot::Occupied { generation, value };
                Index { slot, generation }
            }
            None => {
                self.slots.push(Slot::Occupied {
                    generation: 0,
                    value,
                });
                Index {
                    slot: (self.slots.len() - 1) as u32,
                    generation: 0,
                }
            }
        }
    }

    pub fn remove(&mut self, index: Index) -> Option<T> {
        match self.slots.get_mut(index.slot as usize) {
            Some(Slot::Occupied { generation, .. }) if *generation == index.generation => {
                let next_generation = index.generation + 1;
                let old = std::mem::replace(
                    &mut self.slots[index.slot as usize],
                    Slot::Free {
                        generation: next_generation,
                    },
                );
                self.free.push(index.slot);
                self.len -= 1;
                match old {
                    Slot::Occupied { value, .. } => Some(value),
                    Slot::Free { .. } => unreachable!(),
                }
            }
            _ => None,
        }
    }

    pub fn contains(&self, index: Index) -> bool {
        self.get(index).is_some()
    }

    pub fn get(&self, index: Index) -> Option<&T> {
        match self.slots.get(index.slot as usize) {
            Some(Slot::Occupied { generation, value }) if *generation == index.generation => {
                Some(value)
            }
            _ => None,
        }
    }

    pub fn get_mut(&mut self, index: Index) -> Option<&mut T> {
        match self.slots.get_mut(index.slot as usize) {
            Some(Slot::Occupied { generation, value }) if *generation == index.generation => {
                Some(value)
            }
            _ => None,
        }
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Arena<T> {
        Arena::new()
    }
}
