//! JAKIM zone table.
//!
//! Rectangles are hand-drawn approximations of each zone's districts and
//! overlap along some borders. Resolution takes the first rectangle that
//! contains a point, so small zones (islands, hill stations, federal
//! territories) are declared ahead of the larger zones surrounding them.

use super::models::{Bounds, Zone};

const fn zone(
    code: &'static str,
    state: &'static str,
    label: &'static str,
    lat: (f64, f64),
    lng: (f64, f64),
) -> Zone {
    Zone {
        code,
        state,
        label,
        bounds: Bounds::new(lat.0, lat.1, lng.0, lng.1),
    }
}

const WP: &str = "Wilayah Persekutuan";

pub static ZONES: &[Zone] = &[
    // Wilayah Persekutuan (inside Selangor, so first)
    zone("WLY01", WP, "Kuala Lumpur, Putrajaya", (2.88, 3.25), (101.60, 101.76)),
    zone("WLY02", WP, "Labuan", (5.22, 5.40), (115.15, 115.33)),
    // Johor
    zone("JHR01", "Johor", "Pulau Aur dan Pulau Pemanggil", (2.40, 2.70), (104.25, 104.60)),
    zone("JHR02", "Johor", "Johor Bahru, Kota Tinggi, Mersing, Kulai", (1.25, 2.60), (103.45, 104.35)),
    zone("JHR03", "Johor", "Kluang, Pontian", (1.25, 2.45), (102.95, 103.45)),
    zone("JHR04", "Johor", "Batu Pahat, Muar, Segamat, Gemas Johor, Tangkak", (1.60, 2.85), (102.45, 102.95)),
    // Kedah
    zone("KDH06", "Kedah", "Langkawi", (6.15, 6.50), (99.60, 99.95)),
    zone("KDH07", "Kedah", "Puncak Gunung Jerai", (5.76, 5.83), (100.40, 100.47)),
    zone("KDH01", "Kedah", "Kota Setar, Kubang Pasu, Pokok Sena (Daerah Kecil)", (5.95, 6.45), (100.30, 100.55)),
    zone("KDH02", "Kedah", "Kuala Muda, Yan, Pendang", (5.55, 5.95), (100.30, 100.60)),
    zone("KDH03", "Kedah", "Padang Terap, Sik", (5.78, 6.45), (100.55, 100.95)),
    zone("KDH04", "Kedah", "Baling", (5.45, 5.78), (100.65, 101.10)),
    zone("KDH05", "Kedah", "Bandar Baharu, Kulim", (5.05, 5.55), (100.50, 100.75)),
    // Kelantan
    zone("KTN01", "Kelantan", "Bachok, Kota Bharu, Machang, Pasir Mas, Pasir Puteh, Tanah Merah, Tumpat, Kuala Krai, Mukim Chiku", (5.40, 6.25), (101.95, 102.45)),
    zone("KTN02", "Kelantan", "Gua Musang (Daerah Galas Dan Bertam), Jeli, Jajahan Kecil Lojing", (4.45, 5.80), (101.30, 102.40)),
    // Melaka
    zone("MLK01", "Melaka", "Seluruh Negeri Melaka", (2.05, 2.55), (102.00, 102.60)),
    // Negeri Sembilan
    zone("NGS01", "Negeri Sembilan", "Tampin, Jempol", (2.40, 3.05), (102.35, 102.65)),
    zone("NGS02", "Negeri Sembilan", "Jelebu, Kuala Pilah, Rembau", (2.45, 3.15), (102.05, 102.35)),
    zone("NGS03", "Negeri Sembilan", "Port Dickson, Seremban", (2.40, 2.90), (101.70, 102.05)),
    // Pahang
    zone("PHG01", "Pahang", "Pulau Tioman", (2.70, 2.95), (104.05, 104.25)),
    zone("PHG05", "Pahang", "Genting Sempah, Janda Baik, Bukit Tinggi", (3.25, 3.45), (101.75, 101.90)),
    zone("PHG06", "Pahang", "Cameron Highlands, Genting Highlands, Bukit Fraser", (4.30, 4.65), (101.30, 101.55)),
    zone("PHG07", "Pahang", "Zon Khas Daerah Rompin", (2.55, 3.00), (103.00, 103.65)),
    zone("PHG02", "Pahang", "Kuantan, Pekan, Muadzam Shah", (3.00, 3.95), (102.75, 103.50)),
    zone("PHG03", "Pahang", "Jerantut, Temerloh, Maran, Bera, Chenor, Jengka", (3.00, 4.60), (102.10, 102.75)),
    zone("PHG04", "Pahang", "Bentong, Lipis, Raub", (3.25, 4.60), (101.75, 102.10)),
    // Perlis
    zone("PLS01", "Perlis", "Kangar, Padang Besar, Arau", (6.25, 6.75), (100.10, 100.40)),
    // Pulau Pinang
    zone("PNG01", "Pulau Pinang", "Seluruh Negeri Pulau Pinang", (5.10, 5.60), (100.15, 100.50)),
    // Perak
    zone("PRK07", "Perak", "Bukit Larut", (4.84, 4.88), (100.78, 100.82)),
    zone("PRK04", "Perak", "Temengor, Belum", (5.35, 5.85), (101.25, 101.75)),
    zone("PRK03", "Perak", "Lenggong, Pengkalan Hulu, Grik", (4.95, 5.80), (100.75, 101.40)),
    zone("PRK06", "Perak", "Selama, Taiping, Bagan Serai, Parit Buntar", (4.70, 5.25), (100.35, 100.85)),
    zone("PRK02", "Perak", "Kuala Kangsar, Sg. Siput, Ipoh, Batu Gajah, Kampar", (4.25, 5.00), (100.90, 101.35)),
    zone("PRK05", "Perak", "Kg Gajah, Teluk Intan, Bagan Datuk, Seri Iskandar, Beruas, Parit, Lumut, Sitiawan, Pulau Pangkor", (3.85, 4.70), (100.45, 101.10)),
    zone("PRK01", "Perak", "Tapah, Slim River, Tanjung Malim", (3.65, 4.25), (101.10, 101.70)),
    // Sabah
    zone("SBH06", "Sabah", "Gunung Kinabalu", (6.02, 6.12), (116.50, 116.62)),
    zone("SBH05", "Sabah", "Kudat, Kota Marudu, Pitas, Pulau Banggi, Bahagian Kudat", (6.45, 7.40), (116.55, 117.40)),
    zone("SBH08", "Sabah", "Pensiangan, Keningau, Tambunan, Nabawan, Bahagian Pendalaman (Atas)", (4.40, 5.85), (116.05, 117.00)),
    zone("SBH07", "Sabah", "Kota Kinabalu, Ranau, Kota Belud, Tuaran, Penampang, Papar, Putatan, Bahagian Pantai Barat", (5.55, 6.45), (115.85, 116.85)),
    zone("SBH09", "Sabah", "Beaufort, Kuala Penyu, Sipitang, Tenom, Long Pa Sia, Membakut, Weston, Bahagian Pendalaman (Bawah)", (4.45, 5.55), (115.40, 116.05)),
    zone("SBH02", "Sabah", "Beluran, Telupid, Pinangah, Terusan, Kuamut, Bahagian Sandakan (Barat)", (5.00, 6.35), (117.00, 117.75)),
    zone("SBH01", "Sabah", "Bahagian Sandakan (Timur), Bukit Garam, Semawang, Temanggong, Tambisan, Bandar Sandakan, Sukau", (5.30, 6.20), (117.75, 118.70)),
    zone("SBH03", "Sabah", "Lahad Datu, Silabukan, Kunak, Sahabat, Semporna, Tungku, Bahagian Tawau (Timur)", (4.35, 5.30), (118.05, 119.30)),
    zone("SBH04", "Sabah", "Bandar Tawau, Balong, Merotai, Kalabakan, Bahagian Tawau (Barat)", (4.15, 5.00), (117.00, 118.05)),
    // Selangor
    zone("SGR01", "Selangor", "Gombak, Petaling, Sepang, Hulu Langat, Hulu Selangor, S.Alam", (2.60, 3.80), (101.50, 101.95)),
    zone("SGR02", "Selangor", "Kuala Selangor, Sabak Bernam", (3.15, 3.85), (100.85, 101.40)),
    zone("SGR03", "Selangor", "Klang, Kuala Langat", (2.60, 3.15), (101.25, 101.50)),
    // Sarawak
    zone("SWK09", "Sarawak", "Zon Khas (Kampung Patarikan)", (4.75, 4.85), (115.35, 115.50)),
    zone("SWK01", "Sarawak", "Limbang, Lawas, Sundar, Trusan", (4.00, 5.05), (114.85, 115.70)),
    zone("SWK02", "Sarawak", "Miri, Niah, Bekenu, Sibuti, Marudi", (3.40, 4.70), (113.70, 114.85)),
    zone("SWK03", "Sarawak", "Pandan, Belaga, Suai, Tatau, Sebauh, Bintulu", (2.40, 3.70), (112.80, 114.30)),
    zone("SWK04", "Sarawak", "Sibu, Mukah, Dalat, Song, Igan, Oya, Balingian, Kanowit, Kapit", (1.90, 3.00), (111.75, 113.00)),
    zone("SWK05", "Sarawak", "Sarikei, Matu, Julau, Rajang, Daro, Bintangor, Belawai", (1.90, 2.75), (111.10, 111.75)),
    zone("SWK06", "Sarawak", "Lubok Antu, Sri Aman, Roban, Debak, Kabong, Lingga, Engkelili, Betong, Spaoh, Pusa, Saratok", (1.00, 2.05), (110.90, 111.90)),
    zone("SWK07", "Sarawak", "Serian, Simunjan, Samarahan, Sebuyau, Meludam", (0.95, 1.75), (110.40, 110.90)),
    zone("SWK08", "Sarawak", "Kuching, Bau, Lundu, Sematan", (1.30, 2.05), (109.60, 110.40)),
    // Terengganu
    zone("TRG01", "Terengganu", "Kuala Terengganu, Marang, Kuala Nerus", (5.05, 5.45), (103.05, 103.25)),
    zone("TRG02", "Terengganu", "Besut, Setiu", (5.45, 5.85), (102.35, 102.85)),
    zone("TRG03", "Terengganu", "Hulu Terengganu", (4.75, 5.40), (102.45, 103.05)),
    zone("TRG04", "Terengganu", "Dungun, Kemaman", (3.90, 4.90), (103.05, 103.55)),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_codes_are_unique() {
        let codes: HashSet<&str> = ZONES.iter().map(|z| z.code).collect();
        assert_eq!(codes.len(), ZONES.len());
    }

    #[test]
    fn test_bounds_are_well_formed_and_inside_envelope() {
        for z in ZONES {
            let b = z.bounds;
            assert!(b.lat_min < b.lat_max, "{} latitude range", z.code);
            assert!(b.lng_min < b.lng_max, "{} longitude range", z.code);
            assert!(b.lat_min >= 0.5 && b.lat_max <= 7.5, "{} latitude", z.code);
            assert!(b.lng_min >= 99.0 && b.lng_max <= 120.0, "{} longitude", z.code);
        }
    }

    #[test]
    fn test_every_state_is_covered() {
        let states: HashSet<&str> = ZONES.iter().map(|z| z.state).collect();
        for state in [
            "Johor",
            "Kedah",
            "Kelantan",
            "Melaka",
            "Negeri Sembilan",
            "Pahang",
            "Perlis",
            "Pulau Pinang",
            "Perak",
            "Sabah",
            "Selangor",
            "Sarawak",
            "Terengganu",
            WP,
        ] {
            assert!(states.contains(state), "missing {}", state);
        }
    }
}
