//! Built-in corpus.
//!
//! Keywords are lowercase. Declaration order matters: it fixes keyword index
//! order and therefore tie-breaking between equally scored symbols.

pub(crate) type RawEntry = (&'static str, &'static [&'static str], &'static str);

pub(crate) const BUILTIN_RECORDS: &[RawEntry] = &[
    // emotion
    ("😀", &["happy", "smile", "grin", "joy", "glad"], "emotion"),
    ("😂", &["laugh", "funny", "lol", "tears", "hilarious"], "emotion"),
    ("🥰", &["adore", "crush", "affection", "smitten"], "emotion"),
    ("😊", &["blush", "pleased", "content", "warm"], "emotion"),
    ("😎", &["cool", "sunglasses", "confident", "chill"], "emotion"),
    ("🤔", &["think", "thinking", "wonder", "hmm", "curious"], "emotion"),
    ("😢", &["sad", "cry", "unhappy", "upset", "tear"], "emotion"),
    ("😭", &["sob", "crying", "heartbroken", "devastated"], "emotion"),
    ("😡", &["angry", "mad", "furious", "rage"], "emotion"),
    ("😱", &["scared", "shock", "scream", "fear", "horror"], "emotion"),
    ("😴", &["sleep", "sleepy", "tired", "nap", "bed"], "emotion"),
    ("🤒", &["sick", "ill", "fever", "unwell"], "emotion"),
    ("😋", &["yummy", "delicious", "tasty", "savor"], "emotion"),
    ("🥳", &["party", "celebrate", "birthday", "hooray"], "celebration"),
    ("🎉", &["celebration", "congrats", "congratulations", "party", "tada"], "celebration"),
    ("🎂", &["cake", "birthday", "candles"], "celebration"),
    ("🎁", &["gift", "present", "surprise", "wrapped"], "celebration"),
    ("🎈", &["balloon", "party", "festival"], "celebration"),
    ("🍾", &["champagne", "cheers", "toast", "bottle"], "celebration"),
    ("🎄", &["christmas", "xmas", "tree", "holiday"], "celebration"),
    ("🎆", &["fireworks", "new year", "festival", "night"], "celebration"),
    // love
    ("❤️", &["love", "heart", "romance", "valentine"], "love"),
    ("💔", &["breakup", "broken heart", "heartbreak"], "love"),
    ("😍", &["lovely", "beautiful", "gorgeous", "love"], "love"),
    ("💋", &["kiss", "lips", "smooch"], "love"),
    ("💍", &["ring", "engaged", "proposal", "wedding", "marry"], "love"),
    // gesture
    ("👍", &["yes", "ok", "okay", "approve", "agree", "like", "good"], "gesture"),
    ("👎", &["no", "dislike", "disagree", "bad"], "gesture"),
    ("👋", &["hello", "hi", "bye", "wave", "goodbye"], "gesture"),
    ("👏", &["clap", "applause", "bravo", "well done"], "gesture"),
    ("🙏", &["please", "thanks", "thank you", "pray", "grateful"], "gesture"),
    ("💪", &["strong", "strength", "muscle", "workout", "gym"], "gesture"),
    // food
    ("🍕", &["pizza", "slice", "italian"], "food"),
    ("🍔", &["burger", "hamburger", "fast food"], "food"),
    ("🍟", &["fries", "chips", "fast food"], "food"),
    ("🌮", &["taco", "mexican"], "food"),
    ("🍣", &["sushi", "japanese", "fish"], "food"),
    ("🍜", &["noodles", "ramen", "soup"], "food"),
    ("🍎", &["apple", "fruit", "healthy"], "food"),
    ("🍌", &["banana", "fruit"], "food"),
    ("🍓", &["strawberry", "berry", "fruit"], "food"),
    ("🍦", &["ice cream", "dessert", "sweet"], "food"),
    ("🍩", &["donut", "doughnut", "dessert", "sweet"], "food"),
    ("🍫", &["chocolate", "candy", "sweet"], "food"),
    ("☕", &["coffee", "espresso", "latte", "morning", "cafe"], "food"),
    ("🍵", &["tea", "matcha", "green tea"], "food"),
    ("🍺", &["beer", "pub", "drink", "brew"], "food"),
    ("🍷", &["wine", "red wine", "drink", "dinner"], "food"),
    // animal
    ("🐶", &["dog", "puppy", "pet", "woof"], "animal"),
    ("🐱", &["cat", "kitten", "pet", "meow"], "animal"),
    ("🐭", &["mouse", "rat"], "animal"),
    ("🐰", &["rabbit", "bunny", "easter"], "animal"),
    ("🦊", &["fox", "clever"], "animal"),
    ("🐻", &["bear", "teddy"], "animal"),
    ("🐼", &["panda", "bamboo"], "animal"),
    ("🦁", &["lion", "king", "brave"], "animal"),
    ("🐸", &["frog", "toad"], "animal"),
    ("🐵", &["monkey", "ape", "banana"], "animal"),
    ("🐦", &["bird", "tweet", "fly"], "animal"),
    ("🐟", &["fish", "ocean", "swim"], "animal"),
    ("🦋", &["butterfly", "insect", "transform"], "animal"),
    // nature & weather
    ("☀️", &["sun", "sunny", "bright", "summer", "morning"], "weather"),
    ("🌙", &["moon", "night", "crescent"], "weather"),
    ("⭐", &["star", "favorite", "night"], "weather"),
    ("🌧️", &["rain", "rainy", "storm", "wet"], "weather"),
    ("⛈️", &["thunder", "lightning", "storm"], "weather"),
    ("❄️", &["snow", "cold", "winter", "freezing", "ice"], "weather"),
    ("🌈", &["rainbow", "pride", "colorful"], "weather"),
    ("🔥", &["fire", "hot", "lit", "flame", "burn"], "nature"),
    ("🌊", &["wave", "ocean", "sea", "surf"], "nature"),
    ("🌸", &["flower", "blossom", "spring", "cherry"], "nature"),
    ("🌹", &["rose", "flower", "romantic"], "nature"),
    ("🌳", &["tree", "forest", "nature", "park"], "nature"),
    ("🌍", &["earth", "world", "globe", "planet"], "nature"),
    // activity
    ("⚽", &["soccer", "football", "goal", "ball"], "activity"),
    ("🏀", &["basketball", "hoop", "ball"], "activity"),
    ("🎮", &["game", "gaming", "video game", "play", "controller"], "activity"),
    ("🎵", &["music", "song", "melody", "note"], "activity"),
    ("🎸", &["guitar", "rock", "band"], "activity"),
    ("📚", &["book", "books", "read", "study", "library"], "activity"),
    ("🏃", &["run", "running", "jog", "race"], "activity"),
    ("💃", &["dance", "dancing", "salsa"], "activity"),
    // travel
    ("✈️", &["plane", "flight", "travel", "airport", "trip"], "travel"),
    ("🚗", &["car", "drive", "road trip"], "travel"),
    ("🚀", &["rocket", "launch", "space", "fast"], "travel"),
    ("🏖️", &["beach", "vacation", "holiday", "sand"], "travel"),
    ("🏠", &["home", "house"], "travel"),
    // object
    ("💻", &["computer", "laptop", "code", "work"], "object"),
    ("📱", &["phone", "mobile", "call", "text"], "object"),
    ("💡", &["idea", "light", "bulb", "insight"], "object"),
    ("💰", &["money", "cash", "rich", "pay"], "object"),
    ("📷", &["camera", "photo", "picture"], "object"),
    ("⏰", &["alarm", "clock", "time", "wake"], "object"),
    // symbol
    ("✅", &["done", "check", "complete", "success"], "symbol"),
    ("❌", &["wrong", "cross", "cancel", "fail"], "symbol"),
    ("⚠️", &["warning", "caution", "alert"], "symbol"),
    ("💯", &["hundred", "perfect", "score", "totally"], "symbol"),
    ("✨", &["sparkle", "magic", "shiny", "new"], "symbol"),
];

/// Hand-curated list of commonly used symbols.
pub(crate) const POPULAR_SYMBOLS: &[&str] = &[
    "😀", "😂", "❤️", "👍", "😍", "🎉", "🔥", "😊", "🙏", "😭", "🥰", "✨", "😎", "💯", "🤔",
];
