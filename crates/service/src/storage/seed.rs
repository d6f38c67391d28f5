//! Demonstration records loaded into every fresh store.

use models::{
    destination::{Coordinates, NewDestination},
    event::NewEvent,
    experience::NewExperience,
    hidden_gem::NewHiddenGem,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn destinations() -> Vec<NewDestination> {
    vec![
        NewDestination {
            name: "Cape Coast".into(),
            region: "Central Region".into(),
            description: "Historic coastal town with rich cultural heritage and stunning beaches. Cape Coast Castle, a UNESCO World Heritage site, stands as a powerful reminder of the transatlantic slave trade. Nearby, Kakum National Park offers treetop walks through lush rainforest.".into(),
            short_description: "Historic coastal town with rich cultural heritage and stunning beaches.".into(),
            image_url: "https://www.penguintravel.com/uploads/news/news_490.jpg".into(),
            rating: 47,
            coordinates: Coordinates { lat: 5.1053, lng: -1.2466 },
            top_attractions: strings(&["Cape Coast Castle", "Kakum National Park"]),
            tags: strings(&["Cultural Heritage", "Beaches"]),
        },
        NewDestination {
            name: "Kumasi".into(),
            region: "Ashanti Region".into(),
            description: "Kumasi is the cultural heart of Ghana and home to the Ashanti Kingdom with vibrant markets. The city is known for its rich cultural heritage, traditional crafts, and the seat of the Ashanti Kingdom. Visit the Manhyia Palace and explore the enormous Kejetia Market.".into(),
            short_description: "Cultural heart of Ghana and home to the Ashanti Kingdom with vibrant markets.".into(),
            image_url: "https://rggnews.com/wp-content/uploads/2024/03/WhatsApp-Image-2024-03-11-at-10.39.50-AM.jpeg".into(),
            rating: 45,
            coordinates: Coordinates { lat: 6.6885, lng: -1.6244 },
            top_attractions: strings(&["Manhyia Palace", "Kejetia Market"]),
            tags: strings(&["Cultural Heritage", "Markets"]),
        },
        NewDestination {
            name: "Mole National Park".into(),
            region: "Northern Region".into(),
            description: "Ghana's largest wildlife sanctuary featuring diverse flora and fauna. Mole offers visitors the chance to see elephants, antelopes, and various bird species in their natural habitat. Walking safaris with armed rangers provide an up-close wildlife experience.".into(),
            short_description: "Ghana's largest wildlife sanctuary featuring diverse flora and fauna.".into(),
            image_url: "https://images.unsplash.com/photo-1523805009345-7448845a9e53?ixlib=rb-1.2.1&auto=format&fit=crop&w=600&q=80".into(),
            rating: 48,
            coordinates: Coordinates { lat: 9.2644, lng: -1.8458 },
            top_attractions: strings(&["Safari Tours", "Wildlife Viewing"]),
            tags: strings(&["Nature & Wildlife", "Safari"]),
        },
    ]
}

pub fn experiences() -> Vec<NewExperience> {
    vec![
        NewExperience {
            title: "Traditional Dance Workshops".into(),
            category: "Cultural".into(),
            description: "Learn authentic Ghanaian dance forms from local experts".into(),
            image_url: "https://landtours.com/blog/wp-content/uploads/2024/05/adowa.jpg-1080x675.webp".into(),
            location: "Accra".into(),
            duration: "3 hours".into(),
            price: 45,
        },
        NewExperience {
            title: "Ghanaian Cooking Classes".into(),
            category: "Culinary".into(),
            description: "Master local dishes with ingredients from traditional markets".into(),
            image_url: "https://protour.africa/wp-content/uploads/2023/12/WhatsApp-Image-2023-12-19-at-9.37.15-PM.jpeg".into(),
            location: "Kumasi".into(),
            duration: "4 hours".into(),
            price: 60,
        },
        NewExperience {
            title: "Kente Weaving Workshop".into(),
            category: "Crafts".into(),
            description: "Learn traditional textile techniques from master weavers".into(),
            image_url: "https://visitghana.com/wp-content/uploads/2019/02/3903_adanwomase-kente-village.jpg".into(),
            location: "Bonwire".into(),
            duration: "5 hours".into(),
            price: 50,
        },
    ]
}

pub fn hidden_gems() -> Vec<NewHiddenGem> {
    vec![
        NewHiddenGem {
            name: "Lake Bosumtwi".into(),
            description: "A sacred lake formed by a meteorite impact, surrounded by traditional villages and lush forests.".into(),
            image_url: "https://images.unsplash.com/photo-1569488859134-24b568d5ac14?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80".into(),
            region: "Ashanti Region".into(),
        },
        NewHiddenGem {
            name: "Tafi Atome Monkey Sanctuary".into(),
            description: "A community-based ecotourism initiative protecting sacred mona monkeys in their natural habitat.".into(),
            image_url: "https://images.unsplash.com/photo-1554866585-e4b14f4251b8?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80".into(),
            region: "Volta Region".into(),
        },
        NewHiddenGem {
            name: "Paga Crocodile Pond".into(),
            description: "A sacred site where crocodiles live in harmony with humans, believed to host the souls of the ancestors.".into(),
            image_url: "https://images.unsplash.com/photo-1564419320461-6870880221a0?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80".into(),
            region: "Upper East Region".into(),
        },
        NewHiddenGem {
            name: "Wli Waterfalls".into(),
            description: "The highest waterfall in West Africa, situated in a stunning valley surrounded by lush forests and mountains.".into(),
            image_url: "https://images.unsplash.com/photo-1604762512526-b7068d08e169?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80".into(),
            region: "Volta Region".into(),
        },
    ]
}

pub fn events() -> Vec<NewEvent> {
    vec![
        NewEvent {
            title: "Homowo Festival".into(),
            description: "A traditional harvest festival celebrated by the Ga people with drumming and dance.".into(),
            location: "Accra, Greater Accra Region".into(),
            date: "May 20, 2024".into(),
            month: "MAY".into(),
            day: "20".into(),
        },
        NewEvent {
            title: "Chale Wote Street Art Festival".into(),
            description: "Annual street art festival showcasing alternative art, music, dance, and performance.".into(),
            location: "Jamestown, Accra".into(),
            date: "June 5, 2024".into(),
            month: "JUN".into(),
            day: "05".into(),
        },
        NewEvent {
            title: "Akwasidae Festival".into(),
            description: "Royal ceremony celebrating Ashanti heritage with colorful processions and traditional music.".into(),
            location: "Kumasi, Ashanti Region".into(),
            date: "July 12, 2024".into(),
            month: "JUL".into(),
            day: "12".into(),
        },
    ]
}
