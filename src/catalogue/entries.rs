//! The built-in catalogue entries, in menu order.
//!
//! Entries are kept exactly as the analysts wrote them, including the
//! duplicated distinct-providers query and the fixed city filter.

use super::CatalogueEntry;

pub(super) const ENTRIES: &[CatalogueEntry] = &[
    CatalogueEntry {
        question: "How many food providers and receivers are there in each city?",
        sql: r#"SELECT 
                COALESCE(p."City", r."City") AS "City", 
                COALESCE(p.provider_count, 0) AS provider_count,
                COALESCE(r.receiver_count, 0) AS receiver_count
            FROM (
                SELECT "City", COUNT(*) AS provider_count 
                FROM providers_data 
                GROUP BY "City"
            ) p 
            FULL OUTER JOIN (
                SELECT "City", COUNT(*) AS receiver_count 
                FROM receivers_data 
                GROUP BY "City"
            ) r 
            ON p."City" = r."City"
            ORDER BY "City";"#,
    },
    CatalogueEntry {
        question: "Which type of food provider contributes the most food?",
        sql: r#"SELECT "Type", COUNT(*) AS provider_count 
               FROM providers_data 
               GROUP BY "Type" 
               ORDER BY provider_count DESC 
               LIMIT 1;"#,
    },
    CatalogueEntry {
        question: "What is the contact information of food providers in a specific city?",
        sql: r#"SELECT "Name", "Type", "City", "Contact" 
               FROM providers_data 
               WHERE "City" = 'East Sheena';"#,
    },
    CatalogueEntry {
        question: "Which receivers have claimed the most food?",
        sql: r#"SELECT r."Name", COUNT(c."Claim_ID") AS total_claims 
               FROM claims_data c 
               JOIN receivers_data r ON c."Receiver_ID" = r."Receiver_ID" 
               GROUP BY r."Name" 
               ORDER BY total_claims DESC;"#,
    },
    CatalogueEntry {
        question: "What is the total quantity of food available from all providers?",
        sql: r#"SELECT SUM("Quantity") AS total_food_quantity 
               FROM food_listings_data;"#,
    },
    CatalogueEntry {
        question: "Which city has the highest number of food listings?",
        sql: r#"SELECT "Location", COUNT(*) AS listing_count 
               FROM food_listings_data 
               GROUP BY "Location" 
               ORDER BY listing_count DESC 
               LIMIT 1;"#,
    },
    CatalogueEntry {
        question: "What are the most commonly available food types?",
        sql: r#"SELECT "Food_Type", COUNT(*) AS food_type_count 
               FROM food_listings_data 
               GROUP BY "Food_Type" 
               ORDER BY food_type_count DESC;"#,
    },
    CatalogueEntry {
        question: "How many food claims have been made for each food item?",
        sql: r#"SELECT "Food_ID", COUNT(*) AS claim_count 
               FROM claims_data 
               GROUP BY "Food_ID" 
               ORDER BY claim_count DESC;"#,
    },
    CatalogueEntry {
        question: "Which provider has had the highest number of successful food claims?",
        sql: r#"SELECT P."Name" AS Provider_Name, COUNT(C."Claim_ID") AS Successful_Claims_Count
               FROM claims_data AS C
               JOIN food_listings_data AS FL ON C."Food_ID" = FL."Food_ID"
               JOIN providers_data AS P ON FL."Provider_ID" = P."Provider_ID"
               WHERE C."Status" = 'Completed'
               GROUP BY P."Name"
               ORDER BY Successful_Claims_Count DESC
               LIMIT 1;"#,
    },
    CatalogueEntry {
        question: "What percentage of food claims are completed vs. pending vs. canceled?",
        sql: r#"SELECT "Status", COUNT(*) AS status_count,
                      ROUND(100.0 * COUNT(*) / SUM(COUNT(*)) OVER (), 2) AS percentage
               FROM claims_data
               GROUP BY "Status"
               ORDER BY percentage DESC;"#,
    },
    CatalogueEntry {
        question: "What is the average quantity of food claimed per receiver?",
        sql: r#"SELECT C."Receiver_ID", ROUND(AVG(FL."Quantity"), 2) AS avg_quantity_claimed
               FROM claims_data AS C
               JOIN food_listings_data AS FL ON C."Food_ID" = FL."Food_ID"
               GROUP BY C."Receiver_ID"
               ORDER BY avg_quantity_claimed DESC;"#,
    },
    CatalogueEntry {
        question: "Which meal type is claimed the most?",
        sql: r#"SELECT "Meal_Type", SUM("Quantity") AS total_claimed 
               FROM claims_data, food_listings_data 
               GROUP BY "Meal_Type" 
               ORDER BY total_claimed DESC 
               LIMIT 1;"#,
    },
    CatalogueEntry {
        question: "What is the total quantity of food donated by each provider?",
        sql: r#"SELECT "Provider_ID", SUM("Quantity") AS total_quantity_donated
               FROM food_listings_data
               GROUP BY "Provider_ID"
               ORDER BY total_quantity_donated DESC;"#,
    },
    CatalogueEntry {
        question: "Average quantity of food donated per listing by each provider:",
        sql: r#"SELECT p."Name", AVG(f."Quantity") AS avg_quantity_per_listing
               FROM food_listings_data f
               JOIN providers_data p ON f."Provider_ID" = p."Provider_ID"
               GROUP BY p."Name"
               ORDER BY avg_quantity_per_listing DESC;"#,
    },
    CatalogueEntry {
        question: "Which receiver has claimed the most quantity of food?",
        sql: r#"SELECT r."Name" AS Receiver_Name, 
       SUM(fl."Quantity") AS total_claimed
FROM claims_data c
JOIN receivers_data r ON c."Receiver_ID" = r."Receiver_ID"
JOIN food_listings_data fl ON c."Food_ID" = fl."Food_ID"
WHERE c."Status" = 'Completed'
GROUP BY r."Name"
ORDER BY total_claimed DESC
LIMIT 1;
"#,
    },
    CatalogueEntry {
        question: "Distribution of food listings by food type",
        sql: r#"SELECT "Food_Type", COUNT(*) AS listing_count
               FROM food_listings_data
               GROUP BY "Food_Type"
               ORDER BY listing_count DESC;"#,
    },
    CatalogueEntry {
        question: "Total listings still available (unclaimed)",
        sql: r#"SELECT COUNT(*) AS available_listings
FROM food_listings_data f
LEFT JOIN claims_data c ON f."Food_ID" = c."Food_ID"
WHERE c."Food_ID" IS NULL;
"#,
    },
    CatalogueEntry {
        question: "Provider with most active listings",
        sql: r#"SELECT r."Name" AS Receiver_Name, COUNT(DISTINCT f."Provider_ID") AS unique_providers
FROM claims_data c
JOIN food_listings_data f ON c."Food_ID" = f."Food_ID"
JOIN receivers_data r ON c."Receiver_ID" = r."Receiver_ID"
GROUP BY r."Name"
ORDER BY unique_providers DESC
LIMIT 1;
"#,
    },
    CatalogueEntry {
        question: "Average number of claims per listing",
        sql: r#"SELECT ROUND(COUNT(*) * 1.0 / (SELECT COUNT(*) FROM food_listings_data), 2) AS avg_claims_per_listing
               FROM claims_data;"#,
    },
    CatalogueEntry {
        question: "Receiver with claims from most different providers",
        sql: r#"SELECT r."Name" AS Receiver_Name, COUNT(DISTINCT f."Provider_ID") AS unique_providers
FROM claims_data c
JOIN food_listings_data f ON c."Food_ID" = f."Food_ID"
JOIN receivers_data r ON c."Receiver_ID" = r."Receiver_ID"
GROUP BY r."Name"
ORDER BY unique_providers DESC
LIMIT 1;
;"#,
    },
    CatalogueEntry {
        question: "Provider-wise claim success rate (%)",
        sql: r#"SELECT 
  p."Name",
  ROUND(
    SUM(CASE WHEN c."Status" = 'Completed' THEN 1 ELSE 0 END) * 100.0 / COUNT(c."Claim_ID"),
    2
  ) AS success_rate
FROM claims_data c
JOIN food_listings_data f ON c."Food_ID" = f."Food_ID"
JOIN providers_data p ON f."Provider_ID" = p."Provider_ID"
GROUP BY p."Name"
ORDER BY success_rate DESC;
"#,
    },
    CatalogueEntry {
        question: "Most Frequently Claimed Food Type",
        sql: r#"SELECT f."Food_Type", COUNT(c."Claim_ID") AS total_claims
FROM claims_data c
JOIN food_listings_data f ON c."Food_ID" = f."Food_ID"
GROUP BY f."Food_Type"
ORDER BY total_claims DESC
LIMIT 1;"#,
    },
    CatalogueEntry {
        question: " City with Highest Number of Unique Receivers",
        sql: r#"SELECT r."City", COUNT(DISTINCT r."Receiver_ID") AS total_receivers
FROM receivers_data r
GROUP BY r."City"
ORDER BY total_receivers DESC
LIMIT 1;"#,
    },
];
