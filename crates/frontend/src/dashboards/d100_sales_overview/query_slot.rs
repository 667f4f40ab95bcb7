//! Версионированный слот запроса: побеждает последний запрос.
//!
//! Каждый запрос получает билет. Записать результат может только билет
//! последнего `begin`, более старые отбрасываются, и медленный ответ не
//! перезапишет данные более нового фильтра.

use super::api::LoadError;

/// Билет одного выполняющегося запроса
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket<K> {
    generation: u64,
    pub key: K,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Discarded,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuerySlot<K, T> {
    pub data: Option<T>,
    pub error: Option<String>,
    pub loading: bool,
    generation: u64,
    current: Option<K>,
}

impl<K, T> Default for QuerySlot<K, T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            loading: false,
            generation: 0,
            current: None,
        }
    }
}

impl<K: Clone + PartialEq, T> QuerySlot<K, T> {
    /// Регистрирует новый запрос для `key`. Все незавершённые становятся устаревшими.
    pub fn begin(&mut self, key: K) -> Ticket<K> {
        self.generation += 1;
        self.current = Some(key.clone());
        self.loading = true;
        Ticket {
            generation: self.generation,
            key,
        }
    }

    pub fn is_current(&self, ticket: &Ticket<K>) -> bool {
        ticket.generation == self.generation && self.current.as_ref() == Some(&ticket.key)
    }

    /// Сохраняет ответ. При ошибке прежние данные остаются на экране.
    pub fn complete(&mut self, ticket: Ticket<K>, result: Result<T, LoadError>) -> Completion {
        if !self.is_current(&ticket) {
            return Completion::Discarded;
        }

        self.loading = false;
        match result {
            Ok(value) => {
                self.data = Some(value);
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.to_string());
            }
        }
        Completion::Applied
    }

    /// Устанавливает данные, полученные не через запросы слота
    pub fn prime(&mut self, value: T) {
        self.data = Some(value);
        self.error = None;
    }

    pub fn current_key(&self) -> Option<&K> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Slot = QuerySlot<&'static str, Vec<u32>>;

    #[test]
    fn test_success_replaces_data() {
        let mut slot = Slot::default();
        let ticket = slot.begin("a");
        assert!(slot.loading);

        assert_eq!(slot.complete(ticket, Ok(vec![1, 2])), Completion::Applied);
        assert_eq!(slot.data, Some(vec![1, 2]));
        assert!(!slot.loading);
        assert_eq!(slot.error, None);
    }

    #[test]
    fn test_latest_request_wins_when_older_resolves_last() {
        let mut slot = Slot::default();
        let r1 = slot.begin("A");
        let r2 = slot.begin("B");

        assert_eq!(slot.complete(r2, Ok(vec![2])), Completion::Applied);
        assert_eq!(slot.complete(r1, Ok(vec![1])), Completion::Discarded);

        assert_eq!(slot.data, Some(vec![2]));
        assert_eq!(slot.current_key(), Some(&"B"));
    }

    #[test]
    fn test_stale_response_arriving_first_is_discarded() {
        let mut slot = Slot::default();
        let r1 = slot.begin("A");
        let r2 = slot.begin("B");

        assert_eq!(slot.complete(r1, Ok(vec![1])), Completion::Discarded);
        assert_eq!(slot.data, None);
        assert!(slot.loading);

        assert_eq!(slot.complete(r2, Ok(vec![2])), Completion::Applied);
        assert_eq!(slot.data, Some(vec![2]));
    }

    #[test]
    fn test_stale_error_does_not_surface() {
        let mut slot = Slot::default();
        let r1 = slot.begin("A");
        let r2 = slot.begin("B");
        slot.complete(r2, Ok(vec![2]));

        assert_eq!(
            slot.complete(r1, Err(LoadError::Status(500))),
            Completion::Discarded
        );
        assert_eq!(slot.error, None);
    }

    #[test]
    fn test_failure_keeps_previous_data() {
        let mut slot = Slot::default();
        let first = slot.begin("A");
        slot.complete(first, Ok(vec![7]));

        let second = slot.begin("B");
        let outcome = slot.complete(second, Err(LoadError::Request("offline".into())));

        assert_eq!(outcome, Completion::Applied);
        assert_eq!(slot.data, Some(vec![7]));
        assert_eq!(slot.error.as_deref(), Some("Request failed: offline"));
        assert!(!slot.loading);
    }

    #[test]
    fn test_hung_request_does_not_block_later_ones() {
        let mut slot = Slot::default();
        let _never_resolves = slot.begin("A");
        let later = slot.begin("A");

        assert_eq!(slot.complete(later, Ok(vec![3])), Completion::Applied);
        assert_eq!(slot.data, Some(vec![3]));
    }

    #[test]
    fn test_prime_keeps_generation() {
        let mut slot = Slot::default();
        let ticket = slot.begin("A");
        slot.prime(vec![9]);
        assert_eq!(slot.data, Some(vec![9]));

        assert_eq!(slot.complete(ticket, Ok(vec![4])), Completion::Applied);
        assert_eq!(slot.data, Some(vec![4]));
    }
}
