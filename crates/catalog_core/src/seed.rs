use shared::domain::{Product, ProductId, Rating};

/// Products shown when the initial catalog fetch fails.
pub fn fallback_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId(1),
            title: "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops".into(),
            price: 109.95,
            description: "Your perfect pack for everyday use and walks in the forest. Stash your laptop (up to 15 inches) in the padded sleeve, your everyday".into(),
            category: "men's clothing".into(),
            image: Some("https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg".into()),
            rating: Rating {
                rate: 3.9,
                count: 120,
            },
        },
        Product {
            id: ProductId(2),
            title: "Mens Casual Premium Slim Fit T-Shirts".into(),
            price: 22.3,
            description: "Slim-fitting style, contrast raglan long sleeve, three-button henley placket, light weight & soft fabric for breathable and comfortable wearing.".into(),
            category: "men's clothing".into(),
            image: Some("https://fakestoreapi.com/img/71-3HjGNDUL._AC_SY879._SX._UX._SY._UY_.jpg".into()),
            rating: Rating {
                rate: 4.1,
                count: 259,
            },
        },
        Product {
            id: ProductId(3),
            title: "Mens Cotton Jacket".into(),
            price: 55.99,
            description: "great outerwear jackets for Spring/Autumn/Winter, suitable for many occasions, such as working, hiking, camping, mountain/rock climbing, cycling, traveling or other outdoors.".into(),
            category: "men's clothing".into(),
            image: Some("https://fakestoreapi.com/img/71li-ujtlUL._AC_UX679_.jpg".into()),
            rating: Rating {
                rate: 4.7,
                count: 500,
            },
        },
        Product {
            id: ProductId(4),
            title: "John Hardy Women's Legends Naga Gold & Silver Dragon Station Chain Bracelet".into(),
            price: 695.0,
            description: "From our Legends Collection, the Naga was inspired by the mythical water dragon that protects the ocean's pearl.".into(),
            category: "jewelery".into(),
            image: Some("https://fakestoreapi.com/img/71pWzhdJNwL._AC_UL640_QL65_ML3_.jpg".into()),
            rating: Rating {
                rate: 4.6,
                count: 400,
            },
        },
    ]
}
