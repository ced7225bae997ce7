//! GraphQL query definitions for Shopify Admin API.
//!
//! Each query is a unit struct implementing `graphql_client::GraphQLQuery`,
//! with a module of the same name (snake case) holding the query document,
//! its `Variables`, and its `ResponseData`, the same layout the
//! `graphql_client` derive generates. The documents are written by hand and
//! request only the fields the collection tools read.
//!
//! Connections are read through `nodes` rather than `edges`; cursors come
//! from `pageInfo.endCursor`.

use graphql_client::{GraphQLQuery, QueryBody};
use serde::{Deserialize, Serialize};

/// Fields read from every product, for rule evaluation and display.
macro_rules! product_fields_fragment {
    () => {
        r"
fragment ProductFields on Product {
  id
  title
  handle
  vendor
  productType
  tags
  featuredImage { url }
  priceRangeV2 { minVariantPrice { amount } }
}"
    };
}

/// Implements `GraphQLQuery` for a query struct and its module.
macro_rules! graphql_query {
    ($query:ident, $module:ident) => {
        impl GraphQLQuery for $query {
            type Variables = $module::Variables;
            type ResponseData = $module::ResponseData;

            fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
                QueryBody {
                    variables,
                    query: $module::QUERY,
                    operation_name: $module::OPERATION_NAME,
                }
            }
        }
    };
}

// =============================================================================
// Shared response shapes
// =============================================================================

/// `pageInfo { hasNextPage endCursor }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfoFields {
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

/// `{ url }` of an `Image`.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageUrl {
    pub url: String,
}

/// A list read through a connection's `nodes` field.
#[derive(Debug, Clone, Deserialize)]
pub struct Nodes<T> {
    pub nodes: Vec<T>,
}

/// A connection page: `nodes` plus `pageInfo`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    pub nodes: Vec<T>,
    pub page_info: PageInfoFields,
}

/// Response shape of `fragment ProductFields`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFields {
    pub id: String,
    pub title: String,
    pub handle: String,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub featured_image: Option<ImageUrl>,
    pub price_range_v2: Option<PriceRange>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    pub min_variant_price: Option<MoneyAmount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MoneyAmount {
    pub amount: String,
}

// =============================================================================
// Collection queries
// =============================================================================

/// Page of collections with their rule sets, subcategories and parent.
///
/// The two `custom` metafields are fetched by key. Nested connection sizes
/// multiply into the requested query cost, see `COLLECTIONS_PAGE_SIZE`.
pub struct GetCollections;

pub mod get_collections {
    use super::{Connection, Deserialize, ImageUrl, Nodes, Serialize};

    pub const OPERATION_NAME: &str = "GetCollections";
    pub const QUERY: &str = r#"
query GetCollections(
  $first: Int!
  $after: String
  $namespace: String!
  $subcategoryKey: String!
  $parentKey: String!
  $subcategoryLimit: Int!
) {
  collections(first: $first, after: $after) {
    nodes {
      id
      title
      handle
      image { url }
      ruleSet {
        appliedDisjunctively
        rules { column relation condition }
      }
      subcategories: metafield(namespace: $namespace, key: $subcategoryKey) {
        references(first: $subcategoryLimit) {
          nodes {
            ... on Collection {
              id
              title
              handle
              image { url }
            }
          }
        }
      }
      parentCollection: metafield(namespace: $namespace, key: $parentKey) {
        value
      }
    }
    pageInfo { hasNextPage endCursor }
  }
}"#;

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        pub first: i64,
        pub after: Option<String>,
        pub namespace: String,
        pub subcategory_key: String,
        pub parent_key: String,
        pub subcategory_limit: i64,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub collections: Connection<CollectionNode>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CollectionNode {
        pub id: String,
        pub title: String,
        pub handle: String,
        pub image: Option<ImageUrl>,
        pub rule_set: Option<RuleSetFields>,
        #[serde(default)]
        pub subcategories: Option<ReferencesMetafield>,
        #[serde(default)]
        pub parent_collection: Option<ValueMetafield>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RuleSetFields {
        pub applied_disjunctively: bool,
        pub rules: Vec<RuleFields>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct RuleFields {
        pub column: String,
        pub relation: String,
        pub condition: String,
    }

    /// A list-of-references metafield; only its references are read.
    #[derive(Debug, Clone, Deserialize)]
    pub struct ReferencesMetafield {
        pub references: Option<Nodes<ReferenceNode>>,
    }

    /// A single-value metafield.
    #[derive(Debug, Clone, Deserialize)]
    pub struct ValueMetafield {
        pub value: Option<String>,
    }

    /// A metafield reference. Non-collection references arrive as `{}`.
    #[derive(Debug, Clone, Default, Deserialize)]
    pub struct ReferenceNode {
        pub id: Option<String>,
        pub title: Option<String>,
        pub handle: Option<String>,
        pub image: Option<ImageUrl>,
    }
}

graphql_query!(GetCollections, get_collections);

/// Page of products within one collection.
pub struct GetCollectionProducts;

pub mod get_collection_products {
    use super::{Connection, Deserialize, ProductFields, Serialize};

    pub const OPERATION_NAME: &str = "GetCollectionProducts";
    pub const QUERY: &str = concat!(
        r"
query GetCollectionProducts($id: ID!, $first: Int!, $after: String) {
  collection(id: $id) {
    products(first: $first, after: $after) {
      nodes { ...ProductFields }
      pageInfo { hasNextPage endCursor }
    }
  }
}",
        product_fields_fragment!()
    );

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub id: String,
        pub first: i64,
        pub after: Option<String>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub collection: Option<CollectionProducts>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct CollectionProducts {
        pub products: Connection<ProductFields>,
    }
}

graphql_query!(GetCollectionProducts, get_collection_products);

// =============================================================================
// Product queries
// =============================================================================

/// Page of store products (used as the rule preview sample).
pub struct GetProducts;

pub mod get_products {
    use super::{Connection, Deserialize, ProductFields, Serialize};

    pub const OPERATION_NAME: &str = "GetProducts";
    pub const QUERY: &str = concat!(
        r"
query GetProducts($first: Int!, $after: String) {
  products(first: $first, after: $after) {
    nodes { ...ProductFields }
    pageInfo { hasNextPage endCursor }
  }
}",
        product_fields_fragment!()
    );

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub first: i64,
        pub after: Option<String>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub products: Connection<ProductFields>,
    }
}

graphql_query!(GetProducts, get_products);

// =============================================================================
// File queries
// =============================================================================

/// Page of files matching a search query.
pub struct GetFiles;

pub mod get_files {
    use super::{Connection, Deserialize, ImageUrl, Serialize};

    pub const OPERATION_NAME: &str = "GetFiles";
    pub const QUERY: &str = r"
query GetFiles($query: String!, $first: Int!, $after: String) {
  files(first: $first, query: $query, after: $after) {
    nodes {
      ... on MediaImage {
        id
        preview { image { url } }
      }
    }
    pageInfo { hasNextPage endCursor }
  }
}";

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub query: String,
        pub first: i64,
        pub after: Option<String>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub files: Connection<FileNode>,
    }

    /// A file. Files other than `MediaImage` arrive as `{}`.
    #[derive(Debug, Clone, Default, Deserialize)]
    pub struct FileNode {
        pub id: Option<String>,
        pub preview: Option<FilePreview>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct FilePreview {
        pub image: Option<ImageUrl>,
    }
}

graphql_query!(GetFiles, get_files);
