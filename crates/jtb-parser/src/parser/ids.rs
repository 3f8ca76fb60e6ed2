use nanoid::nanoid;

use crate::catalog::ModuleType;

const TOKEN_ALPHABET: [char; 36] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// `type_token_counter` ids; one token per parse run, one counter step per
/// module.
#[derive(Debug)]
pub(crate) struct IdGenerator {
    token: String,
    counter: usize,
}

impl IdGenerator {
    pub(crate) fn new() -> Self {
        Self {
            token: nanoid!(13, &TOKEN_ALPHABET),
            counter: 0,
        }
    }

    pub(crate) fn next(&mut self, kind: ModuleType) -> String {
        self.counter += 1;
        format!("{}_{}_{}", kind.as_str(), self.token, self.counter)
    }

    pub(crate) fn count(&self) -> usize {
        self.counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_share_a_token_and_count_up() {
        let mut ids = IdGenerator::new();
        let first = ids.next(ModuleType::Section);
        let second = ids.next(ModuleType::NumberCounter);
        let token = &first["section_".len()..first.len() - "_1".len()];
        assert_eq!(token.len(), 13);
        assert_eq!(second, format!("number_counter_{token}_2"));
        assert_eq!(ids.count(), 2);
    }
}
