use crate::controllers::interactive::status::StatusText;

pub trait StatusDisplayPort: Send + Sync {
    fn show(&self, status: &StatusText);
}
