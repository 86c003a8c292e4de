//! Built-in product list.

use crate::types::{Category, Price, PriceError, ProductId};

use super::Product;

/// One row of the seed table: id, name, price in cents, image, category, description.
type SeedRow = (&'static str, &'static str, i64, &'static str, Category, &'static str);

const SEED: &[SeedRow] = &[
    // Tees
    (
        "1",
        "F1 Racing Heritage Tee",
        4500,
        "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=500&h=500&fit=crop",
        Category::Tees,
        "Premium cotton racing inspired t-shirt with modern fit and vintage F1 graphics",
    ),
    (
        "2",
        "Monaco GP Commemorative Tee",
        5000,
        "https://images.unsplash.com/photo-1503341504253-dff4815485f1?w=500&h=500&fit=crop",
        Category::Tees,
        "Limited edition Monaco Grand Prix commemorative tee with circuit map design",
    ),
    (
        "3",
        "Pit Crew Performance Tee",
        4200,
        "https://images.unsplash.com/photo-1618354691373-d851c5c3a990?w=500&h=500&fit=crop",
        Category::Tees,
        "Professional pit crew inspired design with moisture-wicking fabric",
    ),
    (
        "4",
        "Speed Demon Racing Tee",
        4800,
        "https://images.unsplash.com/photo-1576566588028-4147f3842f27?w=500&h=500&fit=crop",
        Category::Tees,
        "Bold racing graphics tee for true speed enthusiasts with premium cotton blend",
    ),
    (
        "5",
        "Victory Lap Celebration Tee",
        4600,
        "https://images.unsplash.com/photo-1581655353564-df123a1eb820?w=500&h=500&fit=crop",
        Category::Tees,
        "Celebrate victory in style with this premium racing championship tee",
    ),
    (
        "6",
        "Circuit Master Graphic Tee",
        4400,
        "https://images.unsplash.com/photo-1529374255404-311a2a4f1fd9?w=500&h=500&fit=crop",
        Category::Tees,
        "Master the circuit with this sleek racing tee featuring iconic track layouts",
    ),
    // Jackets
    (
        "7",
        "Racing Team Bomber Jacket",
        12000,
        "https://images.unsplash.com/photo-1551028719-00167b16eac5?w=500&h=500&fit=crop",
        Category::Jackets,
        "Premium racing bomber jacket with wind-resistant fabric and team patches",
    ),
    (
        "8",
        "F1 Driver Replica Jacket",
        13500,
        "https://images.unsplash.com/photo-1594938298603-c8148c4dae35?w=500&h=500&fit=crop",
        Category::Jackets,
        "Official driver replica jacket with authentic team colors and sponsor logos",
    ),
    (
        "9",
        "Pit Lane Technical Jacket",
        9800,
        "https://images.unsplash.com/photo-1556821840-3a63f95609a7?w=500&h=500&fit=crop",
        Category::Jackets,
        "Technical jacket inspired by pit lane fashion with multiple functional pockets",
    ),
    (
        "10",
        "Speed Windbreaker Pro",
        8500,
        "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=500&h=500&fit=crop",
        Category::Jackets,
        "Lightweight windbreaker perfect for racing conditions with reflective details",
    ),
    (
        "11",
        "Grand Prix Luxury Jacket",
        15000,
        "https://images.unsplash.com/photo-1544966503-7cc5ac882d5d?w=500&h=500&fit=crop",
        Category::Jackets,
        "Luxury racing jacket with premium materials and sophisticated design",
    ),
    // Caps
    (
        "12",
        "F1 Classic Racing Cap",
        3500,
        "https://images.unsplash.com/photo-1575428652377-a2d80e2277fc?w=500&h=500&fit=crop",
        Category::Caps,
        "Classic F1 inspired cap with embroidered logo and adjustable strap",
    ),
    (
        "13",
        "Racing Team Snapback",
        3200,
        "https://images.unsplash.com/photo-1588850561407-ed78c282e89b?w=500&h=500&fit=crop",
        Category::Caps,
        "Modern snapback with racing graphics and flat brim design",
    ),
    (
        "14",
        "Pit Crew Professional Cap",
        3800,
        "https://images.unsplash.com/photo-1571945153237-4929e783af4a?w=500&h=500&fit=crop",
        Category::Caps,
        "Professional pit crew style cap with moisture-wicking headband",
    ),
    (
        "15",
        "Speed Demon Visor",
        2800,
        "https://images.unsplash.com/photo-1566479179817-c0c8b3ac8bb3?w=500&h=500&fit=crop",
        Category::Caps,
        "Athletic visor for racing enthusiasts with UV protection",
    ),
    (
        "16",
        "Victory Championship Cap",
        4000,
        "https://images.unsplash.com/photo-1606107557195-0e29a4b5b4aa?w=500&h=500&fit=crop",
        Category::Caps,
        "Championship victory commemorative cap with gold embroidery details",
    ),
    // Accessories
    (
        "17",
        "Racing Chain Necklace",
        6500,
        "https://images.unsplash.com/photo-1515562141207-7a88fb7ce338?w=500&h=500&fit=crop",
        Category::Accessories,
        "Premium stainless steel chain with racing-inspired pendant design",
    ),
    (
        "18",
        "F1 Titanium Bracelet",
        8500,
        "https://images.unsplash.com/photo-1611652022419-a9419f74343d?w=500&h=500&fit=crop",
        Category::Accessories,
        "Sleek titanium bracelet with engraved racing motifs",
    ),
    (
        "19",
        "Racing Chronograph Watch",
        25000,
        "https://images.unsplash.com/photo-1594576662863-ab5cd0e462ff?w=500&h=500&fit=crop",
        Category::Accessories,
        "Precision racing chronograph watch with tachymeter bezel",
    ),
    (
        "20",
        "Speed Demon Leather Belt",
        4500,
        "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=500&h=500&fit=crop",
        Category::Accessories,
        "Racing inspired leather belt with metal buckle and racing stripe detail",
    ),
    (
        "21",
        "F1 Premium Keychain",
        1500,
        "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=500&h=500&fit=crop",
        Category::Accessories,
        "Premium metal F1 keychain with enamel logo and leather accent",
    ),
    (
        "22",
        "Racing Sunglasses Pro",
        9000,
        "https://images.unsplash.com/photo-1511499767150-a48a237f0083?w=500&h=500&fit=crop",
        Category::Accessories,
        "Professional racing sunglasses with polarized lenses and sport frame",
    ),
    // Limited
    (
        "23",
        "Championship Gold Edition Tee",
        7500,
        "https://images.unsplash.com/photo-1618453292729-adc2ca90f4d4?w=500&h=500&fit=crop",
        Category::Limited,
        "Limited edition championship gold tee - only 100 pieces worldwide",
    ),
    (
        "24",
        "Monaco Exclusive Racing Jacket",
        20000,
        "https://images.unsplash.com/photo-1601924284077-f0faf48e3ab2?w=500&h=500&fit=crop",
        Category::Limited,
        "Exclusive Monaco Grand Prix limited edition jacket with numbered certificate",
    ),
    (
        "25",
        "Legendary Driver Heritage Cap",
        6000,
        "https://images.unsplash.com/photo-1566479179817-c0c8b3ac8bb3?w=500&h=500&fit=crop",
        Category::Limited,
        "Limited edition cap honoring legendary F1 drivers with special embroidery",
    ),
    (
        "26",
        "Carbon Fiber Racing Watch",
        45000,
        "https://images.unsplash.com/photo-1524592094714-0f0654e20314?w=500&h=500&fit=crop",
        Category::Limited,
        "Ultra-exclusive carbon fiber racing watch with limited production run",
    ),
    (
        "27",
        "Victory Celebration Collection",
        15000,
        "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=500&h=500&fit=crop",
        Category::Limited,
        "Limited celebration collection with premium tee and cap combo set",
    ),
];

/// Materialize the seed table in display order.
///
/// # Errors
///
/// Returns [`PriceError`] if any row has a non-positive price.
pub(super) fn products() -> Result<Vec<Product>, PriceError> {
    SEED.iter().map(product_from_row).collect()
}

fn product_from_row(
    &(id, name, cents, image, category, description): &SeedRow,
) -> Result<Product, PriceError> {
    Ok(Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: Price::from_cents(cents)?,
        image: image.to_owned(),
        category,
        description: Some(description.to_owned()),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_every_seed_row_is_valid() {
        assert_eq!(products().unwrap().len(), SEED.len());
    }

    #[test]
    fn test_row_with_non_positive_price_is_rejected() {
        let free: SeedRow = ("x", "Free Sticker", 0, "", Category::Accessories, "");
        assert_eq!(
            product_from_row(&free),
            Err(PriceError::NotPositive(Decimal::ZERO))
        );

        let negative: SeedRow = ("y", "Refund", -500, "", Category::Accessories, "");
        assert!(product_from_row(&negative).is_err());
    }

    #[test]
    fn test_row_builds_product() {
        let product = product_from_row(&SEED[0]).unwrap();
        assert_eq!(product.id, "1");
        assert_eq!(product.price.to_string(), "$45.00");
        assert_eq!(product.category, Category::Tees);
    }
}
