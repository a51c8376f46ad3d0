//! The compiled-in batch. Order is the order of the console report.

pub const IMAGE_URLS: &[&str] = &[
    "https://escolahabilidade.com/wp-content/uploads/2024/06/Design-sem-nome-7.png",
    "https://www.escolahabilidade.com/logo-escola-habilidade.png",
    "https://www.escolahabilidade.com/assets/logos/original/logo-original.png",
    "https://www.escolahabilidade.com.br/assets/programacao-nova/hero/hero-bg-new.jpg",
    "https://www.escolahabilidade.com.br/assets/informatica-nova/hero/hero-bg-new.jpg",
    "https://www.escolahabilidade.com.br/assets/informatica-nova/hero/1318912.png",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_source_url_parses() {
        for raw in IMAGE_URLS {
            let parsed = url::Url::parse(raw);
            assert!(parsed.is_ok(), "{raw} should be a valid URL");
        }
    }
}
