/// Village/town a farmer can pick on the callback form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Village {
    pub id: &'static str,
    pub name: &'static str,
    /// Kannada name
    pub name_kn: &'static str,
    pub district: &'static str,
}

const fn village(
    id: &'static str,
    name: &'static str,
    name_kn: &'static str,
    district: &'static str,
) -> Village {
    Village {
        id,
        name,
        name_kn,
        district,
    }
}

/// Reference table, grouped by district in display order
pub static VILLAGES: &[Village] = &[
    // Kolar
    village("kolar-kolar", "Kolar", "ಕೋಲಾರ", "Kolar"),
    village("kolar-bangarpet", "Bangarpet", "ಬಂಗಾರಪೇಟೆ", "Kolar"),
    village("kolar-kgf", "KGF", "ಕೆಜಿಎಫ್", "Kolar"),
    village("kolar-mulbagal", "Mulbagal", "ಮುಳಬಾಗಿಲು", "Kolar"),
    village("kolar-srinivaspur", "Srinivaspur", "ಶ್ರೀನಿವಾಸಪುರ", "Kolar"),
    // Chickballapur
    village("chk-chickballapur", "Chickballapur", "ಚಿಕ್ಕಬಳ್ಳಾಪುರ", "Chickballapur"),
    village("chk-chintamani", "Chintamani", "ಚಿಂತಾಮಣಿ", "Chickballapur"),
    village("chk-gauribidanur", "Gauribidanur", "ಗೌರಿಬಿದನೂರು", "Chickballapur"),
    village("chk-sidlaghatta", "Sidlaghatta", "ಸಿದ್ಲಘಟ್ಟ", "Chickballapur"),
    // Tumkur
    village("tmk-tumkur", "Tumkur", "ತುಮಕೂರು", "Tumkur"),
    village("tmk-tiptur", "Tiptur", "ತಿಪಟೂರು", "Tumkur"),
    village("tmk-sira", "Sira", "ಸಿರಾ", "Tumkur"),
    village("tmk-madhugiri", "Madhugiri", "ಮಧುಗಿರಿ", "Tumkur"),
    // Bangalore Rural
    village("blr-devanahalli", "Devanahalli", "ದೇವನಹಳ್ಳಿ", "Bangalore Rural"),
    village("blr-doddaballapur", "Doddaballapur", "ದೊಡ್ಡಬಳ್ಳಾಪುರ", "Bangalore Rural"),
    village("blr-hosakote", "Hosakote", "ಹೊಸಕೋಟೆ", "Bangalore Rural"),
    village("blr-nelamangala", "Nelamangala", "ನೆಲಮಂಗಲ", "Bangalore Rural"),
    // Ramanagara
    village("rmn-ramanagara", "Ramanagara", "ರಾಮನಗರ", "Ramanagara"),
    village("rmn-magadi", "Magadi", "ಮಾಗಡಿ", "Ramanagara"),
    village("rmn-channapatna", "Channapatna", "ಚನ್ನಪಟ್ಟಣ", "Ramanagara"),
    village("rmn-kanakapura", "Kanakapura", "ಕನಕಪುರ", "Ramanagara"),
    // Mandya
    village("mnd-mandya", "Mandya", "ಮಂಡ್ಯ", "Mandya"),
    village("mnd-maddur", "Maddur", "ಮದ್ದೂರು", "Mandya"),
    village("mnd-malavalli", "Malavalli", "ಮಳವಳ್ಳಿ", "Mandya"),
    village("mnd-srirangapatna", "Srirangapatna", "ಶ್ರೀರಂಗಪಟ್ಟಣ", "Mandya"),
    // Mysuru
    village("mys-mysuru", "Mysuru", "ಮೈಸೂರು", "Mysuru"),
    village("mys-nanjangud", "Nanjangud", "ನಂಜನಗೂಡು", "Mysuru"),
    village("mys-hunsur", "Hunsur", "ಹುಣಸೂರು", "Mysuru"),
    village("mys-tn-narsipur", "T. Narasipur", "ತಿ. ನರಸೀಪುರ", "Mysuru"),
    // Hassan
    village("hss-hassan", "Hassan", "ಹಾಸನ", "Hassan"),
    village("hss-arsikere", "Arsikere", "ಅರಸೀಕೆರೆ", "Hassan"),
    village("hss-channarayapatna", "Channarayapatna", "ಚನ್ನರಾಯಪಟ್ಟಣ", "Hassan"),
    village("hss-belur", "Belur", "ಬೇಲೂರು", "Hassan"),
    // Chitradurga
    village("ctd-chitradurga", "Chitradurga", "ಚಿತ್ರದುರ್ಗ", "Chitradurga"),
    village("ctd-davangere", "Davangere", "ದಾವಣಗೆರೆ", "Chitradurga"),
    village("ctd-challakere", "Challakere", "ಚಳ್ಳಕೆರೆ", "Chitradurga"),
    // Catch-all for farmers outside the listed villages
    village("other", "Other", "ಇತರೆ", "Other"),
];
