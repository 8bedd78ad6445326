//! Static lexicons backing the pattern recognizer.
//!
//! Entries are matched case-sensitively against the source text. Lists are
//! intentionally curated rather than exhaustive; the recognizer seam exists
//! so a model-backed implementation can replace lexicon coverage wholesale.

/// Countries, cities, and states (GPE).
pub(crate) const GPE: &[&str] = &[
    // Countries
    "Afghanistan", "Argentina", "Australia", "Austria", "Bangladesh", "Belgium",
    "Brazil", "Canada", "Chile", "China", "Colombia", "Cuba", "Denmark", "Egypt",
    "Ethiopia", "Finland", "France", "Germany", "Ghana", "Greece", "Hungary",
    "Iceland", "India", "Indonesia", "Iran", "Iraq", "Ireland", "Israel", "Italy",
    "Jamaica", "Japan", "Jordan", "Kenya", "Kuwait", "Lebanon", "Libya",
    "Malaysia", "Mexico", "Morocco", "Nepal", "Netherlands", "New Zealand",
    "Nigeria", "North Korea", "Norway", "Pakistan", "Peru", "Philippines",
    "Poland", "Portugal", "Qatar", "Romania", "Russia", "Saudi Arabia",
    "Senegal", "Serbia", "Singapore", "Somalia", "South Africa", "South Korea",
    "Spain", "Sri Lanka", "Sudan", "Sweden", "Switzerland", "Syria", "Taiwan",
    "Tanzania", "Thailand", "Tunisia", "Turkey", "Uganda", "Ukraine",
    "United Arab Emirates", "United Kingdom", "United States", "Uruguay",
    "Venezuela", "Vietnam", "Yemen", "Zimbabwe", "America", "USA", "U.S.", "UK",
    // Cities
    "Paris", "London", "Berlin", "Madrid", "Rome", "Vienna", "Amsterdam",
    "Brussels", "Lisbon", "Dublin", "Athens", "Moscow", "Istanbul", "Cairo",
    "Lagos", "Nairobi", "Johannesburg", "Tokyo", "Kyoto", "Osaka", "Beijing",
    "Shanghai", "Hong Kong", "Seoul", "Mumbai", "Delhi", "New Delhi", "Bangkok",
    "Jakarta", "Sydney", "Melbourne", "Auckland", "Toronto", "Vancouver",
    "Montreal", "Mexico City", "São Paulo", "Buenos Aires", "Lima", "Bogotá",
    "Rio de Janeiro", "New York", "New York City", "Los Angeles", "Chicago",
    "Houston", "Phoenix", "Philadelphia", "San Antonio", "San Diego", "Dallas",
    "San Jose", "Austin", "Seattle", "Denver", "Boston", "Miami", "Atlanta",
    "Detroit", "San Francisco", "Cupertino", "Washington", "Geneva", "Zurich",
    "Munich", "Frankfurt", "Hamburg", "Barcelona", "Milan", "Naples", "Venice",
    "Prague", "Budapest", "Warsaw", "Stockholm", "Oslo", "Copenhagen",
    "Helsinki", "Reykjavik", "Edinburgh", "Manchester", "Glasgow", "Cardiff",
    "Belfast", "Dubai", "Abu Dhabi", "Riyadh", "Doha", "Tehran", "Baghdad",
    "Damascus", "Beirut", "Jerusalem", "Tel Aviv", "Kabul", "Islamabad",
    "Karachi", "Lahore", "Dhaka", "Hanoi", "Manila", "Kuala Lumpur", "Taipei",
    "Havana",
    // US states
    "California", "Texas", "Florida", "Ohio", "Georgia", "Michigan", "Virginia",
    "Arizona", "Colorado", "Oregon", "Nevada", "Utah", "Kansas", "Iowa",
    "Montana", "Alaska", "Hawaii", "Vermont", "Maine", "Idaho", "Wyoming",
    "Nebraska", "Oklahoma", "Arkansas", "Louisiana", "Missouri", "Alabama",
    "Tennessee", "Kentucky", "Indiana", "Illinois", "Wisconsin", "Minnesota",
    "North Dakota", "South Dakota", "New Mexico", "New Jersey", "New Hampshire",
    "Rhode Island", "Connecticut", "Massachusetts", "Maryland", "Delaware",
    "Pennsylvania", "North Carolina", "South Carolina", "West Virginia",
];

/// Non-GPE locations: waters, ranges, regions (LOC).
pub(crate) const LOC: &[&str] = &[
    "Pacific Ocean", "Atlantic Ocean", "Indian Ocean", "Arctic Ocean",
    "Mediterranean Sea", "Caribbean", "Sahara", "Sahara Desert", "Gobi Desert",
    "Amazon River", "Nile", "Mississippi River", "Danube", "Rhine",
    "Alps", "Andes", "Himalayas", "Rocky Mountains", "Mount Everest",
    "Mount Kilimanjaro", "Mount Fuji", "Grand Canyon", "Great Barrier Reef",
    "Lake Victoria", "Lake Michigan", "Middle East", "Arctic", "Antarctica",
    "Silicon Valley",
];

/// Buildings and man-made structures (FAC).
pub(crate) const FAC: &[&str] = &[
    "Eiffel Tower", "Golden Gate Bridge", "Brooklyn Bridge", "White House",
    "Empire State Building", "Statue of Liberty", "Great Wall of China",
    "Great Wall", "Taj Mahal", "Louvre", "Buckingham Palace", "Kremlin",
    "Heathrow Airport", "Grand Central Station", "Panama Canal", "Suez Canal",
    "Hoover Dam", "Madison Square Garden", "Wembley Stadium", "Pentagon",
    "Times Square", "Central Park",
];

/// Companies, agencies, institutions (ORG).
pub(crate) const ORG: &[&str] = &[
    "Google", "Microsoft", "Apple", "Amazon", "Facebook", "Meta", "Netflix",
    "Tesla", "IBM", "Intel", "Oracle", "Samsung", "Sony", "Toyota",
    "Volkswagen", "Boeing", "Airbus", "NASA", "FBI", "CIA", "NATO", "UNESCO",
    "UNICEF", "United Nations", "European Union", "World Bank",
    "International Monetary Fund", "World Health Organization", "Congress",
    "Senate", "Red Cross", "Goldman Sachs", "JPMorgan", "Bank of America",
    "Walmart", "McDonald's", "Coca-Cola", "Pfizer", "Moderna", "Reuters",
    "BBC", "CNN", "Harvard", "Stanford", "MIT", "Yale", "Princeton",
    "Interpol", "OPEC", "WHO", "IMF",
];

/// Nationalities, religious and political groups (NORP).
pub(crate) const NORP: &[&str] = &[
    "American", "Americans", "British", "French", "German", "Germans",
    "Chinese", "Russian", "Russians", "Japanese", "Korean", "Koreans",
    "Italian", "Italians", "Spanish", "Spaniards", "Mexican", "Mexicans",
    "Canadian", "Canadians", "Indian", "Indians", "Brazilian", "Brazilians",
    "Australian", "Australians", "Egyptian", "Egyptians", "Turkish", "Turks",
    "Greek", "Greeks", "Dutch", "Swedish", "Swedes", "Norwegian", "Norwegians",
    "Danish", "Danes", "Polish", "Poles", "Ukrainian", "Ukrainians", "Israeli",
    "Israelis", "Iranian", "Iranians", "Iraqi", "Iraqis", "Saudi", "Saudis",
    "European", "Europeans", "African", "Africans", "Asian", "Asians",
    "Christian", "Christians", "Muslim", "Muslims", "Jewish", "Jews",
    "Buddhist", "Buddhists", "Hindu", "Hindus", "Catholic", "Catholics",
    "Protestant", "Protestants", "Democrat", "Democrats", "Republican",
    "Republicans", "Communist", "Communists", "Socialist", "Socialists",
];

/// Named languages not already claimed as nationality adjectives (LANGUAGE).
pub(crate) const LANGUAGE: &[&str] = &[
    "English", "Mandarin", "Cantonese", "Hindi", "Urdu", "Bengali", "Tamil",
    "Swahili", "Yoruba", "Amharic", "Latin", "Sanskrit", "Esperanto", "Hebrew",
    "Farsi", "Pashto", "Tagalog", "Catalan", "Quechua",
];

/// Named events, wars, holidays (EVENT).
pub(crate) const EVENT: &[&str] = &[
    "World War I", "World War II", "Cold War", "Olympics", "Olympic Games",
    "World Cup", "Super Bowl", "Great Depression", "Hurricane Katrina",
    "Christmas", "Easter", "Thanksgiving", "Ramadan", "Hanukkah", "Diwali",
    "Woodstock", "French Revolution", "American Revolution", "Civil War",
];

/// Named laws, treaties, legal documents (LAW).
pub(crate) const LAW: &[&str] = &[
    "Constitution", "First Amendment", "Second Amendment", "Civil Rights Act",
    "Clean Air Act", "Affordable Care Act", "Patriot Act", "Roe v. Wade",
    "Geneva Convention", "Paris Agreement", "Kyoto Protocol", "Magna Carta",
    "Treaty of Versailles", "GDPR",
];

/// Commercial products (PRODUCT).
pub(crate) const PRODUCT: &[&str] = &[
    "iPhone", "iPad", "iPod", "MacBook", "Android", "Windows", "Xbox",
    "PlayStation", "Kindle", "Boeing 747", "Airbus A380", "Model S", "Walkman",
    "Photoshop", "Excel", "PowerPoint", "Chrome", "Firefox", "Minecraft",
    "Tetris", "Frisbee",
];

/// Titles of books, films, paintings, songs (WORK_OF_ART).
pub(crate) const WORK_OF_ART: &[&str] = &[
    "Mona Lisa", "Hamlet", "Macbeth", "The Great Gatsby", "War and Peace",
    "Moby Dick", "Don Quixote", "The Odyssey", "Star Wars", "The Godfather",
    "Bohemian Rhapsody", "Starry Night", "The Scream", "Guernica",
];

/// Common given names used to anchor person-name detection (PERSON).
pub(crate) const GIVEN_NAMES: &[&str] = &[
    "John", "James", "Robert", "Michael", "William", "David", "Richard",
    "Joseph", "Thomas", "Charles", "Christopher", "Daniel", "Matthew",
    "Anthony", "Mark", "Donald", "Steven", "Steve", "Paul", "Andrew", "Joshua",
    "Kenneth", "Kevin", "Brian", "George", "Edward", "Ronald", "Timothy",
    "Jason", "Jeffrey", "Ryan", "Jacob", "Nicholas", "Eric", "Jonathan",
    "Stephen", "Larry", "Justin", "Scott", "Brandon", "Benjamin", "Samuel",
    "Frank", "Gregory", "Raymond", "Alexander", "Patrick", "Jack", "Dennis",
    "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan",
    "Jessica", "Sarah", "Karen", "Nancy", "Lisa", "Margaret", "Sandra",
    "Ashley", "Dorothy", "Kimberly", "Emily", "Donna", "Michelle", "Carol",
    "Amanda", "Melissa", "Deborah", "Stephanie", "Rebecca", "Laura", "Sharon",
    "Cynthia", "Kathleen", "Amy", "Angela", "Anna", "Emma", "Olivia", "Sophia",
    "Grace", "Hannah", "Barack", "Abraham", "Winston", "Nelson", "Albert",
    "Isaac", "Marie", "Vladimir", "Boris", "Emmanuel",
];

/// Build a case-sensitive alternation pattern from a lexicon.
///
/// Entries are matched longest-first; a trailing word boundary is only added
/// when the entry ends in a word character (entries like "U.S." end at the
/// dot itself).
pub(crate) fn alternation(entries: &[&str]) -> String {
    let mut sorted: Vec<&str> = entries.to_vec();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));

    let alternatives: Vec<String> = sorted
        .iter()
        .map(|entry| {
            let escaped = regex::escape(entry);
            if entry.chars().last().is_some_and(|c| c.is_alphanumeric()) {
                format!("{escaped}\\b")
            } else {
                escaped
            }
        })
        .collect();

    format!("\\b(?:{})", alternatives.join("|"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn alternation_prefers_longest_entry() {
        let pattern = alternation(&["New York", "New York City"]);
        let re = Regex::new(&pattern).unwrap();
        let m = re.find("in New York City today").unwrap();
        assert_eq!(m.as_str(), "New York City");
    }

    #[test]
    fn alternation_respects_word_boundaries() {
        let pattern = alternation(&["Iran"]);
        let re = Regex::new(&pattern).unwrap();
        assert!(re.find("they ran home").is_none());
        assert!(re.find("Irania").is_none());
        assert!(re.find("visited Iran.").is_some());
    }

    #[test]
    fn alternation_handles_entries_ending_in_punctuation() {
        let pattern = alternation(&["U.S."]);
        let re = Regex::new(&pattern).unwrap();
        assert_eq!(re.find("the U.S. economy").unwrap().as_str(), "U.S.");
    }

    #[test]
    fn lexicons_are_free_of_duplicates() {
        for list in [
            GPE, LOC, FAC, ORG, NORP, LANGUAGE, EVENT, LAW, PRODUCT, WORK_OF_ART, GIVEN_NAMES,
        ] {
            let unique: std::collections::HashSet<_> = list.iter().collect();
            assert_eq!(unique.len(), list.len());
        }
    }
}
