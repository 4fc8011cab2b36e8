//! Location subdomains and their display names, in lookup order.

pub static LOCATIONS: &[(&str, &str)] = &[
    ("auburn", "Auburn, AL"),
    ("bham", "Birmingham, AL"),
    ("dothan", "Dothan, AL"),
    ("shoals", "Florence / Muscle Shoals, AL"),
    ("gadsden", "Gadsden-Anniston, AL"),
    ("huntsville", "Huntsville / Decatur, AL"),
    ("mobile", "Mobile, AL"),
    ("montgomery", "Montgomery, AL"),
    ("tuscaloosa", "Tuscaloosa, AL"),
    ("anchorage", "Anchorage / Mat-Su, AK"),
    ("fairbanks", "Fairbanks, AK"),
    ("kenai", "Kenai Peninsula, AK"),
    ("juneau", "Juneau, AK"),
    ("flagstaff", "Flagstaff / Sedona, AZ"),
    ("mohave", "Mohave County, AZ"),
    ("phoenix", "Phoenix, AZ"),
    ("prescott", "Prescott, AZ"),
    ("showlow", "Show Low, AZ"),
    ("sierravista", "Sierra Vista, AZ"),
    ("tucson", "Tucson, AZ"),
    ("yuma", "Yuma, AZ"),
    ("fayar", "Fayetteville, AR"),
    ("fortsmith", "Fort Smith, AR"),
    ("jonesboro", "Jonesboro, AR"),
    ("littlerock", "Little Rock, AR"),
    ("texarkana", "Texarkana, AR"),
    ("bakersfield", "Bakersfield, CA"),
    ("chico", "Chico, CA"),
    ("fresno", "Fresno / Madera, CA"),
    ("goldcountry", "Gold Country, CA"),
    ("hanford", "Hanford-Corcoran, CA"),
    ("humboldt", "Humboldt County, CA"),
    ("imperial", "Imperial County, CA"),
    ("inlandempire", "Inland Empire, CA"),
    ("losangeles", "Los Angeles, CA"),
    ("mendocino", "Mendocino County, CA"),
    ("merced", "Merced, CA"),
    ("modesto", "Modesto, CA"),
    ("monterey", "Monterey Bay, CA"),
    ("orangecounty", "Orange County, CA"),
    ("palmsprings", "Palm Springs, CA"),
    ("redding", "Redding, CA"),
    ("sacramento", "Sacramento, CA"),
    ("sandiego", "San Diego, CA"),
    ("sfbay", "San Francisco Bay Area, CA"),
    ("slo", "San Luis Obispo, CA"),
    ("santabarbara", "Santa Barbara, CA"),
    ("santamaria", "Santa Maria, CA"),
    ("siskiyou", "Siskiyou County, CA"),
    ("stockton", "Stockton, CA"),
    ("susanville", "Susanville, CA"),
    ("ventura", "Ventura County, CA"),
    ("visalia", "Visalia-Tulare, CA"),
    ("yubasutter", "Yuba-Sutter, CA"),
    ("boulder", "Boulder, CO"),
    ("cosprings", "Colorado Springs, CO"),
    ("denver", "Denver, CO"),
    ("eastco", "Eastern CO"),
    ("fortcollins", "Fort Collins / North CO"),
    ("pueblo", "Pueblo, CO"),
    ("rockies", "High Rockies, CO"),
    ("westslope", "Western Slope, CO"),
    ("newhaven", "New Haven, CT"),
    ("hartford", "Hartford, CT"),
    ("nwct", "Northwest CT"),
    ("eastern-ct", "Eastern CT"),
    ("delaware", "Delaware"),
    ("washingtondc", "Washington, DC"),
    ("daytona", "Daytona Beach, FL"),
    ("keys", "Florida Keys, FL"),
    ("fortlauderdale", "Fort Lauderdale, FL"),
    ("fortmyers", "Fort Myers / SW Florida, FL"),
    ("gainesville", "Gainesville, FL"),
    ("cfl", "Heartland Florida, FL"),
    ("jacksonville", "Jacksonville, FL"),
    ("lakeland", "Lakeland, FL"),
    ("lakecity", "Lake City, FL"),
    ("ocala", "Ocala, FL"),
    ("okaloosa", "Okaloosa / Walton, FL"),
    ("orlando", "Orlando, FL"),
    ("panama", "Panama City, FL"),
    ("pensacola", "Pensacola, FL"),
    ("sarasota", "Sarasota-Bradenton, FL"),
    ("miami", "South Florida / Miami, FL"),
    ("spacecoast", "Space Coast, FL"),
    ("staugustine", "St Augustine, FL"),
    ("tallahassee", "Tallahassee, FL"),
    ("tampa", "Tampa Bay Area, FL"),
    ("treasure", "Treasure Coast, FL"),
    ("albanyga", "Albany, GA"),
    ("athens", "Athens, GA"),
    ("atlanta", "Atlanta, GA"),
    ("augusta", "Augusta, GA"),
    ("brunswick", "Brunswick, GA"),
    ("columbus", "Columbus, OH"),
    ("macon", "Macon / Warner Robins, GA"),
    ("nwga", "Northwest GA"),
    ("savannah", "Savannah / Hinesville, GA"),
    ("statesboro", "Statesboro, GA"),
    ("valdosta", "Valdosta, GA"),
    ("honolulu", "Hawaii"),
    ("boise", "Boise, ID"),
    ("easternidaho", "East Idaho, ID"),
    ("lewiston", "Lewiston / Clarkston, ID"),
    ("twinfalls", "Twin Falls, ID"),
    ("bn", "Bloomington-Normal, IL"),
    ("chambana", "Champaign Urbana, IL"),
    ("chicago", "Chicago, IL"),
    ("decatur", "Decatur, IL"),
    ("lasalle", "La Salle Co, IL"),
    ("mattoon", "Mattoon-Charleston, IL"),
    ("peoria", "Peoria, IL"),
    ("rockford", "Rockford, IL"),
    ("carbondale", "Southern Illinois, IL"),
    ("springfieldil", "Springfield, IL"),
    ("quincy", "Western IL"),
    ("bloomington", "Bloomington, IN"),
    ("evansville", "Evansville, IN"),
    ("fortwayne", "Fort Wayne, IN"),
    ("indianapolis", "Indianapolis, IN"),
    ("kokomo", "Kokomo, IN"),
    ("lafayette", "Lafayette, LA"),
    ("muncie", "Muncie / Anderson, IN"),
    ("richmondin", "Richmond, IN"),
    ("southbend", "South Bend / Michiana, IN"),
    ("terrehaute", "Terre Haute, IN"),
    ("ames", "Ames, IA"),
    ("cedarrapids", "Cedar Rapids, IA"),
    ("desmoines", "Des Moines, IA"),
    ("dubuque", "Dubuque, IA"),
    ("fortdodge", "Fort Dodge, IA"),
    ("iowacity", "Iowa City, IA"),
    ("masoncity", "Mason City, IA"),
    ("quadcities", "Quad Cities, IA/IL"),
    ("siouxcity", "Sioux City, IA"),
    ("ottumwa", "Southeast IA"),
    ("waterloo", "Waterloo / Cedar Falls, IA"),
    ("lawrence", "Lawrence, KS"),
    ("ksu", "Manhattan, KS"),
    ("nwks", "Northwest KS"),
    ("salina", "Salina, KS"),
    ("seks", "Southeast KS"),
    ("swks", "Southwest KS"),
    ("topeka", "Topeka, KS"),
    ("wichita", "Wichita, KS"),
    ("bgky", "Bowling Green, KY"),
    ("eastky", "Eastern Kentucky"),
    ("lexington", "Lexington, KY"),
    ("louisville", "Louisville, KY"),
    ("owensboro", "Owensboro, KY"),
    ("westky", "Western KY"),
    ("batonrouge", "Baton Rouge, LA"),
    ("cenla", "Central Louisiana, LA"),
    ("houma", "Houma, LA"),
    ("lakecharles", "Lake Charles, LA"),
    ("monroe", "Monroe, LA"),
    ("neworleans", "New Orleans, LA"),
    ("shreveport", "Shreveport, LA"),
    ("maine", "Maine"),
    ("annapolis", "Annapolis, MD"),
    ("baltimore", "Baltimore, MD"),
    ("easternshore", "Eastern Shore, MD"),
    ("frederick", "Frederick, MD"),
    ("smd", "Southern Maryland"),
    ("westmd", "Western Maryland"),
    ("boston", "Boston, MA"),
    ("capecod", "Cape Cod / Islands, MA"),
    ("southcoast", "South Coast, MA"),
    ("westernmass", "Western Massachusetts"),
    ("worcester", "Worcester / Central MA"),
    ("annarbor", "Ann Arbor, MI"),
    ("battlecreek", "Battle Creek, MI"),
    ("centralmich", "Central Michigan"),
    ("detroit", "Detroit Metro, MI"),
    ("flint", "Flint, MI"),
    ("grandrapids", "Grand Rapids, MI"),
    ("holland", "Holland, MI"),
    ("jxn", "Jackson, MI"),
    ("kalamazoo", "Kalamazoo, MI"),
    ("lansing", "Lansing, MI"),
    ("monroemi", "Monroe, MI"),
    ("muskegon", "Muskegon, MI"),
    ("nmi", "Northern Michigan"),
    ("porthuron", "Port Huron, MI"),
    ("saginaw", "Saginaw-Midland-Bay City, MI"),
    ("swmi", "Southwest Michigan"),
    ("thumb", "The Thumb, MI"),
    ("up", "Upper Peninsula, MI"),
    ("bemidji", "Bemidji, MN"),
    ("brainerd", "Brainerd, MN"),
    ("duluth", "Duluth / Superior, MN"),
    ("mankato", "Mankato, MN"),
    ("minneapolis", "Minneapolis / St Paul, MN"),
    ("rmn", "Rochester, MN"),
    ("marshall", "Southwest MN"),
    ("stcloud", "St Cloud, MN"),
    ("gulfport", "Gulfport / Biloxi, MS"),
    ("hattiesburg", "Hattiesburg, MS"),
    ("jackson", "Jackson, MS"),
    ("meridian", "Meridian, MS"),
    ("northmiss", "North Mississippi"),
    ("natchez", "Southwest MS"),
    ("columbiamo", "Columbia / Jeff City, MO"),
    ("joplin", "Joplin, MO"),
    ("kansascity", "Kansas City, MO"),
    ("kirksville", "Kirksville, MO"),
    ("loz", "Lake of the Ozarks, MO"),
    ("semo", "Southeast Missouri"),
    ("springfield", "Springfield, MO"),
    ("stjoseph", "St Joseph, MO"),
    ("stlouis", "St Louis, MO"),
    ("billings", "Billings, MT"),
    ("bozeman", "Bozeman, MT"),
    ("butte", "Butte, MT"),
    ("greatfalls", "Great Falls, MT"),
    ("helena", "Helena, MT"),
    ("kalispell", "Kalispell, MT"),
    ("missoula", "Missoula, MT"),
    ("montana", "Eastern Montana"),
    ("grandisland", "Grand Island, NE"),
    ("lincoln", "Lincoln, NE"),
    ("northplatte", "North Platte, NE"),
    ("omaha", "Omaha / Council Bluffs, NE"),
    ("scottsbluff", "Scottsbluff / Panhandle, NE"),
    ("elko", "Elko, NV"),
    ("lasvegas", "Las Vegas, NV"),
    ("reno", "Reno / Tahoe, NV"),
    ("nh", "New Hampshire"),
    ("cnj", "Central NJ"),
    ("jerseyshore", "Jersey Shore, NJ"),
    ("newjersey", "North Jersey, NJ"),
    ("southjersey", "South Jersey, NJ"),
    ("albuquerque", "Albuquerque, NM"),
    ("clovis", "Clovis / Portales, NM"),
    ("farmington", "Farmington, NM"),
    ("lascruces", "Las Cruces, NM"),
    ("roswell", "Roswell / Carlsbad, NM"),
    ("santafe", "Santa Fe / Taos, NM"),
    ("albany", "Albany, NY"),
    ("binghamton", "Binghamton, NY"),
    ("buffalo", "Buffalo, NY"),
    ("catskills", "Catskills, NY"),
    ("chautauqua", "Chautauqua, NY"),
    ("elmira", "Elmira-Corning, NY"),
    ("fingerlakes", "Finger Lakes, NY"),
    ("glensfalls", "Glens Falls, NY"),
    ("hudsonvalley", "Hudson Valley, NY"),
    ("ithaca", "Ithaca, NY"),
    ("longisland", "Long Island, NY"),
    ("newyork", "New York City, NY"),
    ("oneonta", "Oneonta, NY"),
    ("plattsburgh", "Plattsburgh-Adirondacks, NY"),
    ("potsdam", "Potsdam-Canton-Massena, NY"),
    ("rochester", "Rochester, NY"),
    ("syracuse", "Syracuse, NY"),
    ("utica", "Utica-Rome-Oneida, NY"),
    ("watertown", "Watertown, NY"),
    ("asheville", "Asheville, NC"),
    ("boone", "Boone, NC"),
    ("charlotte", "Charlotte, NC"),
    ("eastnc", "Eastern NC"),
    ("fayetteville", "Fayetteville, NC"),
    ("greensboro", "Greensboro, NC"),
    ("hickory", "Hickory / Lenoir, NC"),
    ("onslow", "Jacksonville, NC"),
    ("outerbanks", "Outer Banks, NC"),
    ("raleigh", "Raleigh / Durham / CH, NC"),
    ("wilmington", "Wilmington, NC"),
    ("winstonsalem", "Winston-Salem, NC"),
    ("bismarck", "Bismarck, ND"),
    ("fargo", "Fargo / Moorhead, ND"),
    ("grandforks", "Grand Forks, ND"),
    ("nd", "North Dakota"),
    ("akroncanton", "Akron / Canton, OH"),
    ("ashtabula", "Ashtabula, OH"),
    ("athensohio", "Athens, OH"),
    ("chillicothe", "Chillicothe, OH"),
    ("cincinnati", "Cincinnati, OH"),
    ("cleveland", "Cleveland, OH"),
    ("dayton", "Dayton / Springfield, OH"),
    ("limaohio", "Lima / Findlay, OH"),
    ("mansfield", "Mansfield, OH"),
    ("sandusky", "Sandusky, OH"),
    ("toledo", "Toledo, OH"),
    ("tuscarawas", "Tuscarawas Co, OH"),
    ("youngstown", "Youngstown, OH"),
    ("zanesville", "Zanesville / Cambridge, OH"),
    ("lawton", "Lawton, OK"),
    ("enid", "Northwest OK"),
    ("oklahomacity", "Oklahoma City, OK"),
    ("stillwater", "Stillwater, OK"),
    ("tulsa", "Tulsa, OK"),
    ("bend", "Bend, OR"),
    ("corvallis", "Corvallis/Albany, OR"),
    ("eastoregon", "East Oregon, OR"),
    ("eugene", "Eugene, OR"),
    ("klamath", "Klamath Falls, OR"),
    ("medford", "Medford-Ashland, OR"),
    ("oregoncoast", "Oregon Coast, OR"),
    ("portland", "Portland, OR"),
    ("roseburg", "Roseburg, OR"),
    ("salem", "Salem, OR"),
    ("allentown", "Allentown, PA"),
    ("altoona", "Altoona-Johnstown, PA"),
    ("chambersburg", "Cumberland Valley, PA"),
    ("erie", "Erie, PA"),
    ("harrisburg", "Harrisburg, PA"),
    ("lancaster", "Lancaster, PA"),
    ("meadville", "Meadville, PA"),
    ("philadelphia", "Philadelphia, PA"),
    ("pittsburgh", "Pittsburgh, PA"),
    ("poconos", "Poconos, PA"),
    ("reading", "Reading, PA"),
    ("scranton", "Scranton / Wilkes-Barre, PA"),
    ("pennstate", "State College, PA"),
    ("williamsport", "Williamsport, PA"),
    ("york", "York, PA"),
    ("providence", "Providence / Warwick, RI"),
    ("charleston", "Charleston, SC"),
    ("columbia", "Columbia, SC"),
    ("florencesc", "Florence, SC"),
    ("greenville", "Greenville / Upstate, SC"),
    ("hiltonhead", "Hilton Head, SC"),
    ("myrtlebeach", "Myrtle Beach, SC"),
    ("nesd", "Northeast SD"),
    ("pierresd", "Pierre / Central SD"),
    ("rapidcity", "Rapid City / West SD"),
    ("siouxfalls", "Sioux Falls / SE SD"),
    ("sd", "South Dakota"),
    ("chattanooga", "Chattanooga, TN"),
    ("clarksville", "Clarksville, TN"),
    ("cookeville", "Cookeville, TN"),
    ("jacksontn", "Jackson, TN"),
    ("knoxville", "Knoxville, TN"),
    ("memphis", "Memphis, TN"),
    ("nashville", "Nashville, TN"),
    ("tricities", "Tri-Cities, TN"),
    ("abilene", "Abilene, TX"),
    ("amarillo", "Amarillo, TX"),
    ("austin", "Austin, TX"),
    ("beaumont", "Beaumont / Port Arthur, TX"),
    ("brownsville", "Brownsville, TX"),
    ("collegestation", "College Station, TX"),
    ("corpuschristi", "Corpus Christi, TX"),
    ("dallas", "Dallas / Fort Worth, TX"),
    ("nacogdoches", "Deep East Texas, TX"),
    ("delrio", "Del Rio / Eagle Pass, TX"),
    ("elpaso", "El Paso, TX"),
    ("galveston", "Galveston, TX"),
    ("houston", "Houston, TX"),
    ("killeen", "Killeen / Temple / Ft Hood, TX"),
    ("laredo", "Laredo, TX"),
    ("lubbock", "Lubbock, TX"),
    ("mcallen", "McAllen / Edinburg, TX"),
    ("midland", "Midland / Odessa, TX"),
    ("sanangelo", "San Angelo, TX"),
    ("sanantonio", "San Antonio, TX"),
    ("sanmarcos", "San Marcos, TX"),
    ("bigbend", "Southwest TX"),
    ("texoma", "Texoma, TX"),
    ("easttexas", "Tyler / East TX"),
    ("victoriatx", "Victoria, TX"),
    ("waco", "Waco, TX"),
    ("wichitafalls", "Wichita Falls, TX"),
    ("logan", "Logan, UT"),
    ("ogden", "Ogden-Clearfield, UT"),
    ("provo", "Provo / Orem, UT"),
    ("saltlakecity", "Salt Lake City, UT"),
    ("stgeorge", "St George, UT"),
    ("burlington", "Burlington, VT"),
    ("charlottesville", "Charlottesville, VA"),
    ("danville", "Danville, VA"),
    ("fredericksburg", "Fredericksburg, VA"),
    ("harrisonburg", "Harrisonburg, VA"),
    ("lynchburg", "Lynchburg, VA"),
    ("blacksburg", "New River Valley, VA"),
    ("norfolk", "Norfolk / Hampton Roads, VA"),
    ("richmond", "Richmond, VA"),
    ("roanoke", "Roanoke, VA"),
    ("swva", "Southwest VA"),
    ("winchester", "Winchester, VA"),
    ("bellingham", "Bellingham, WA"),
    ("kpr", "Kennewick-Pasco-Richland, WA"),
    ("moseslake", "Moses Lake, WA"),
    ("olympic", "Olympic Peninsula, WA"),
    ("pullman", "Pullman / Moscow, WA"),
    ("seattle", "Seattle-Tacoma, WA"),
    ("skagit", "Skagit / Island / SJI, WA"),
    ("spokane", "Spokane / Coeur d'Alene, WA"),
    ("wenatchee", "Wenatchee, WA"),
    ("yakima", "Yakima, WA"),
    ("charlestonwv", "Charleston, WV"),
    ("martinsburg", "Eastern Panhandle, WV"),
    ("huntington", "Huntington-Ashland, WV"),
    ("morgantown", "Morgantown, WV"),
    ("ohiovalley", "Northern Panhandle, WV"),
    ("parkersburg", "Parkersburg-Marietta, WV"),
    ("swv", "Southern WV"),
    ("wv", "West Virginia (old)"),
    ("wheeling", "Wheeling, WV"),
    ("appleton", "Appleton-Oshkosh-FDL, WI"),
    ("eauclaire", "Eau Claire, WI"),
    ("greenbay", "Green Bay, WI"),
    ("janesville", "Janesville, WI"),
    ("racine", "Kenosha-Racine, WI"),
    ("lacrosse", "La Crosse, WI"),
    ("madison", "Madison, WI"),
    ("milwaukee", "Milwaukee, WI"),
    ("northernwi", "Northern WI"),
    ("sheboygan", "Sheboygan, WI"),
    ("wausau", "Wausau, WI"),
    ("wyoming", "Wyoming"),
    // Canada
    ("barrie", "Barrie, ON"),
    ("calgary", "Calgary, AB"),
    ("comoxvalley", "Comox Valley, BC"),
    ("edmonton", "Edmonton, AB"),
    ("ftmcmurray", "Fort McMurray, AB"),
    ("halifax", "Halifax, NS"),
    ("hamilton", "Hamilton-Burlington, ON"),
    ("kamloops", "Kamloops, BC"),
    ("kelowna", "Kelowna / Okanagan, BC"),
    ("kingston", "Kingston, ON"),
    ("kitchener", "Kitchener-Waterloo-Cambridge, ON"),
    ("lethbridge", "Lethbridge, AB"),
    ("london", "London, ON"),
    ("montreal", "Montreal, QC"),
    ("ottawa", "Ottawa-Hull-Gatineau, ON"),
    ("pei", "PEI"),
    ("quebec", "Quebec City, QC"),
    ("regina", "Regina, SK"),
    ("saskatoon", "Saskatoon, SK"),
    ("soo", "Sault Ste Marie, ON"),
    ("stcatharines", "St Catharines, ON"),
    ("sudbury", "Sudbury, ON"),
    ("thunderbay", "Thunder Bay, ON"),
    ("toronto", "Toronto, ON"),
    ("vancouver", "Vancouver, BC"),
    ("victoria", "Victoria, BC"),
    ("whistler", "Whistler, BC"),
    ("windsor", "Windsor, ON"),
    ("winnipeg", "Winnipeg, MB"),
];
