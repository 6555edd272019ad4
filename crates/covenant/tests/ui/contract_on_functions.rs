use covenant::{Valid, contract};

struct Window {
    start: usize,
    end: usize,
}

impl Valid for Window {
    fn is_valid(&self) -> bool {
        self.start <= self.end
    }
}

impl Window {
    #[contract(
        requires: by <= self.end - self.start,
        maintains: self,
        ensures: *output == self.end - self.start,
    )]
    fn shrink(&mut self, by: usize) -> usize {
        self.start += by;
        self.end - self.start
    }
}

#[contract(
    binds: text,
    ensures: text.len() == n,
)]
fn repeat_x(n: usize) -> String {
    "x".repeat(n)
}

fn main() {
    let mut window = Window { start: 2, end: 9 };
    assert_eq!(window.shrink(3), 4);
    assert_eq!(repeat_x(3), "xxx");
}
