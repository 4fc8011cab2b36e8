//! Search category codes and sort options, in declaration order.

pub static CATEGORIES: &[(&str, &str)] = &[
    // For sale
    ("sss", "All For Sale"),
    ("ata", "Antiques"),
    ("ppa", "Appliances"),
    ("ara", "Arts & Crafts"),
    ("sna", "ATV/UTV/Snowmobile"),
    ("pta", "Auto Parts"),
    ("baa", "Baby & Kid Stuff"),
    ("bar", "Barter"),
    ("haa", "Health & Beauty"),
    ("bip", "Bicycle Parts"),
    ("bia", "Bicycles"),
    ("boa", "Boats"),
    ("bka", "Books"),
    ("bfa", "Business/Commercial"),
    ("cta", "Cars & Trucks"),
    ("ema", "CDs/DVDs/VHS"),
    ("moa", "Cell Phones"),
    ("cla", "Clothing & Accessories"),
    ("cba", "Collectibles"),
    ("syp", "Computer Parts"),
    ("sya", "Computers"),
    ("ela", "Electronics"),
    ("gra", "Farm & Garden"),
    ("zip", "Free Stuff"),
    ("fua", "Furniture"),
    ("gms", "Garage & Moving Sales"),
    ("foa", "General For Sale"),
    ("hva", "Heavy Equipment"),
    ("hsa", "Household Items"),
    ("jwa", "Jewelry"),
    ("maa", "Materials"),
    ("mca", "Motorcycles/Scooters"),
    ("msa", "Musical Instruments"),
    ("pha", "Photo/Video"),
    ("rva", "Recreational Vehicles"),
    ("sga", "Sporting Goods"),
    ("tia", "Tickets"),
    ("tla", "Tools"),
    ("taa", "Toys & Games"),
    ("tra", "Trailers"),
    ("vga", "Video Gaming"),
    ("waa", "Wanted"),
    // Housing
    ("hhh", "All Housing"),
    ("apa", "Apartments / Housing For Rent"),
    ("swp", "Housing Swap"),
    ("hsw", "Housing Wanted"),
    ("off", "Office & Commercial"),
    ("prk", "Parking & Storage"),
    ("rea", "Real Estate For Sale"),
    ("roo", "Rooms & Shares"),
    ("sha", "Rooms Wanted"),
    ("sbw", "Sublets & Temporary"),
    ("vac", "Vacation Rentals"),
    // Jobs, services, gigs, community
    ("jjj", "All Jobs"),
    ("bbb", "All Services"),
    ("ggg", "All Gigs"),
    ("ccc", "All Community"),
];

pub static SORT_OPTIONS: &[(&str, &str)] = &[
    ("relevant", "Most Relevant"),
    ("date", "Newest"),
    ("priceasc", "Price Low to High"),
    ("pricedsc", "Price High to Low"),
];
