use covenant::{Valid, invariant_check, post_condition, pre_condition, validity_check};

struct Ring {
    slots: Vec<Option<u16>>,
    head: usize,
}

impl Valid for Ring {
    fn is_valid(&self) -> bool {
        self.head < self.slots.len()
    }
}

impl Ring {
    fn new(size: usize) -> Self {
        pre_condition!(size > 0);
        let ring = Ring {
            slots: vec![None; size],
            head: 0,
        };
        validity_check!(ring);
        ring
    }

    fn put(&mut self, value: u16) -> Option<u16> {
        let ring = self;
        invariant_check!(ring);
        let head = ring.head;
        let mut evicted = post_condition!(None => |evicted| evicted.is_none_or(|v| v != value));
        *evicted = ring.slots[head].replace(value);
        ring.head = (head + 1) % ring.slots.len();
        *evicted
    }
}

fn main() {
    let mut ring = Ring::new(2);
    assert_eq!(ring.put(1), None);
    assert_eq!(ring.put(2), None);
    assert_eq!(ring.put(3), Some(1));
}
