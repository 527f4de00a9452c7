use crate::text::Component;

/// Something that receives rendered messages, in order.
pub trait Sink {
    fn send_message(&mut self, message: &Component);
}

/// Collects messages, mostly for tests.
impl Sink for Vec<Component> {
    fn send_message(&mut self, message: &Component) {
        self.push(message.clone());
    }
}
