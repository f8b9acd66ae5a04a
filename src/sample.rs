// 🌱 Sample data - the fixed seed set loaded at startup

use chrono::NaiveDate;

use crate::store::HistoryStore;

/// (name, (year, month, day), description)
const SAMPLE_EVENTS: [(&str, (i32, u32, u32), &str); 10] = [
    ("Fransız Devrimi", (1789, 7, 14), "Fransa Krallığına son verildi."),
    ("Amerikan Bağımsızlık Bildirgesi", (1776, 7, 4), "ABD'nin bağımsızlığını ilan etti."),
    ("İlk İnsanın Ay'a Ayak Basması", (1969, 7, 20), "Neil Armstrong, Ay'a ayak bastı."),
    (
        "Berlin Duvarı Yıkıldı",
        (1989, 11, 9),
        "Almanya'nın birleşmesini simgeleyen Berlin Duvarı yıkıldı.",
    ),
    (
        "İspanya İç Savaşı Başladı",
        (1936, 7, 17),
        "Franco liderliğindeki Milliyetçi Hareket, İspanya İç Savaşı'nı başlattı.",
    ),
    (
        "İlk Demokratik Seçimler Güney Afrika'da Yapıldı",
        (1994, 4, 27),
        "Nelson Mandela, Güney Afrika'nın ilk siyahî başkanı seçildi.",
    ),
    (
        "Leonardo da Vinci Mona Lisa'yı Yarattı",
        (1503, 8, 21),
        "Leonardo da Vinci, ünlü tablosu Mona Lisa'yı yarattı.",
    ),
    ("Hiroşima'ya Atom Bombası Atıldı", (1945, 8, 6), "ABD, Hiroşima'ya ilk atom bombasını attı."),
    (
        "Louis Pasteur, Kuduz Aşısını Buldu",
        (1885, 7, 6),
        "Louis Pasteur, kuduz aşısını buldu ve ilk kez bir insan üzerinde denedi.",
    ),
    (
        "İlk Dünya Kadınlar Günü Kutlandı",
        (1909, 3, 8),
        "Clara Zetkin tarafından önerilen Uluslararası Kadınlar Günü kutlandı.",
    ),
];

/// Display-only list shown under the figures view.
///
/// These strings are never parsed into `Figure` records; several use BC
/// years that the dd/mm/yyyy format cannot express anyway.
pub const LEADERS: [&str; 15] = [
    "Mustafa Kemal Atatürk - Kurtuluş Savaşı (1919/05/19 - 1923/07/24)",
    "Napolyon Bonapart - Napolyon Savaşları (1799/11/09 - 1815/06/22)",
    "Gandhi - Hint Bağımsızlık Hareketi (1915/01/09 - 1947/08/15)",
    "Adolf Hitler - Nazi Almanyası (1933/01/30 - 1945/04/30)",
    "Mao Zedong - Çin Devrimi (1949/10/01 - 1976/09/09)",
    "Winston Churchill - II. Dünya Savaşı (1939/09/01 - 1945/09/02)",
    "Joseph Stalin - Sovyetler Birliği Dönemi (1922/04/03 - 1953/03/05)",
    "Queen Victoria - Victorian Çağı (1837/06/20 - 1901/01/22)",
    "Martin Luther King Jr. - Sivil Haklar Hareketi (1955/12/01 - 1968/04/04)",
    "Cleopatra - Mısır Hükümdarlığı (-51/01/01 - -30/08/12)",
    "Elizabeth I - Elizabeth Dönemi (1558/11/17 - 1603/03/24)",
    "Nelson Mandela - Güney Afrika Başkanlığı (1994/05/10 - 1999/06/14)",
    "Julius Caesar - Roma İmparatorluğu (-100/07/12 - -44/03/15)",
    "Mahatma Gandhi - Hindistan Bağımsızlık Hareketi (1915/01/09 - 1948/01/30)",
    "Catherine the Great - Rus İmparatorluğu (1762/07/09 - 1796/11/17)",
];

/// Load the sample events into `store`, in their fixed order
pub fn seed(store: &mut HistoryStore) {
    for (name, (year, month, day), description) in SAMPLE_EVENTS {
        // Literal table: every entry is a real calendar date
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            store.add_event(name, date, description);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_sample_date_is_valid() {
        for (name, (y, m, d), _) in SAMPLE_EVENTS {
            assert!(NaiveDate::from_ymd_opt(y, m, d).is_some(), "bad date for {}", name);
        }
    }

    #[test]
    fn test_seed_keeps_order() {
        let mut store = HistoryStore::new();
        seed(&mut store);

        assert_eq!(store.events()[0].name, "Fransız Devrimi");
        assert_eq!(store.events()[9].name, "İlk Dünya Kadınlar Günü Kutlandı");
    }

    #[test]
    fn test_sample_search_finds_french_revolution() {
        let store = HistoryStore::with_sample_data();
        let hits: Vec<_> = store.search_event("fransız").collect();

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].date, NaiveDate::from_ymd_opt(1789, 7, 14).unwrap());
    }
}
